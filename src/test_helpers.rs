//! Shared test utilities for the siteweld unit-test suite.
//!
//! Tests operate on throwaway temp trees; inject patterns use absolute
//! paths so they resolve regardless of the test runner's working directory.

use std::fs;
use std::path::Path;

/// Write a set of `(relative path, contents)` files under `root`, creating
/// parent directories as needed.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (rel, contents) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
    }
}

/// A markup-dialect inject directive for `pattern`.
pub fn markup_inject(pattern: &str) -> String {
    format!("<!-- inject \"{pattern}\" here -->")
}

/// A block-comment-dialect inject directive for `pattern`.
pub fn block_inject(pattern: &str) -> String {
    format!("/* inject \"{pattern}\" here */")
}

/// A markdown-dialect inject directive for `pattern`.
pub fn markdown_inject(pattern: &str) -> String {
    format!("[//]: # (inject \"{pattern}\" here)")
}
