//! Small path helpers shared by the expansion engine and the unused-file
//! reporter.
//!
//! Inject patterns and the directory walk produce paths in different shapes
//! (`./src/x.txt` vs `src/x.txt`), so everything recorded in the usage set
//! goes through [`canonical`] first and both sides compare equal.

use std::fs;
use std::path::{Component, Path, PathBuf};

/// Canonicalize a path, falling back to the input when canonicalization
/// fails (e.g. the path no longer exists).
pub fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Normalize a glob pattern before resolution: drop `.` components, collapse
/// repeated separators, and resolve `..` against preceding components.
///
/// - `"./src//*.css"` → `"src/*.css"`
/// - `"src/partials/../*.js"` → `"src/*.js"`
/// - `"../shared/*.md"` → `"../shared/*.md"` (leading `..` is kept)
pub fn normalize_pattern(pattern: &str) -> String {
    let mut normalized = PathBuf::new();
    for component in Path::new(pattern).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last_is_normal = matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                );
                if !(last_is_normal && normalized.pop()) {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    if normalized.as_os_str().is_empty() {
        ".".to_string()
    } else {
        normalized.to_string_lossy().into_owned()
    }
}
