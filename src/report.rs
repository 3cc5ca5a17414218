//! Unused-file reporting.
//!
//! After the top-level expansion returns, the whole source root is walked
//! (independently of the expansion traversal) and every regular file that
//! never made it into the usage set is listed. The listing is advisory: it
//! never affects build success.

use crate::paths;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Regular files under `root` that are absent from `used`, sorted.
///
/// `used` holds canonical paths; walked paths are canonicalized for the
/// comparison but reported in their as-walked relative form.
pub fn find_unused(root: &Path, used: &BTreeSet<PathBuf>) -> Vec<PathBuf> {
    let mut unused = Vec::new();
    for entry in WalkDir::new(root).into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        if !used.contains(&paths::canonical(entry.path())) {
            unused.push(entry.path().to_path_buf());
        }
    }
    unused.sort();
    unused
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::write_tree;
    use tempfile::TempDir;

    #[test]
    fn all_files_unused_with_empty_set() {
        let tmp = TempDir::new().unwrap();
        write_tree(tmp.path(), &[("a.txt", "a"), ("sub/b.txt", "b")]);
        let unused = find_unused(tmp.path(), &BTreeSet::new());
        assert_eq!(
            unused,
            vec![tmp.path().join("a.txt"), tmp.path().join("sub/b.txt")]
        );
    }

    #[test]
    fn used_files_excluded() {
        let tmp = TempDir::new().unwrap();
        write_tree(tmp.path(), &[("used.txt", "u"), ("unused.txt", "x")]);
        let mut used = BTreeSet::new();
        used.insert(paths::canonical(&tmp.path().join("used.txt")));
        let unused = find_unused(tmp.path(), &used);
        assert_eq!(unused, vec![tmp.path().join("unused.txt")]);
    }

    #[test]
    fn directories_not_reported() {
        let tmp = TempDir::new().unwrap();
        write_tree(tmp.path(), &[("sub/only.txt", "x")]);
        let unused = find_unused(tmp.path(), &BTreeSet::new());
        assert_eq!(unused, vec![tmp.path().join("sub/only.txt")]);
    }

    #[test]
    fn result_is_sorted() {
        let tmp = TempDir::new().unwrap();
        write_tree(tmp.path(), &[("c.txt", ""), ("a.txt", ""), ("b.txt", "")]);
        let unused = find_unused(tmp.path(), &BTreeSet::new());
        let mut sorted = unused.clone();
        sorted.sort();
        assert_eq!(unused, sorted);
    }
}
