//! CLI output formatting.
//!
//! Formatting is separated from printing so the exact lines are unit
//! testable; `main` owns the actual `println!` calls. Diagnostics emitted
//! during expansion go straight to stderr from the engine and are not
//! routed through here.

use crate::build::BuildReport;
use std::path::PathBuf;

/// Lines announcing a completed build.
pub fn format_build_summary(report: &BuildReport, minify: bool) -> Vec<String> {
    let mut lines = vec![format!(
        "Build completed. Output written to {}",
        report.output.display()
    )];
    if minify {
        lines.push("Minification was applied.".to_string());
    }
    lines
}

/// Advisory listing of source files the build never read. Empty when
/// everything was used.
pub fn format_unused_warning(unused: &[PathBuf]) -> Vec<String> {
    if unused.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![
        String::new(),
        "WARNING: the following files in the source directory were not used in the build:"
            .to_string(),
    ];
    for path in unused {
        lines.push(format!("  - {}", path.display()));
    }
    lines
}
