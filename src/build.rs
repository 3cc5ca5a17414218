//! Top-level build orchestration.
//!
//! A build reads the root document once, seeds the usage set with it, runs
//! the recursive expansion, writes the result to the output path (creating
//! the output directory if needed), and computes the unused-file report.
//!
//! Only root-document I/O is fatal: an unreadable entry document or an
//! unwritable output aborts the build with a [`BuildError`]. Everything the
//! expansion engine runs into along the way (unmatched patterns, skipped
//! entries, minifier failures, depth truncation) is diagnosed and recovered
//! from at the smallest scope without unwinding here.

use crate::expand::{self, Context};
use crate::{paths, report};
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Source tree root, also the scope of the unused-file report.
pub const SOURCE_ROOT: &str = "src";

/// Root document the expansion starts from.
pub const ENTRY_PATH: &str = "src/index.html";

/// Where the assembled document is written.
pub const OUTPUT_PATH: &str = "docs/index.html";

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("failed to read root document {path}: {source}")]
    ReadRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write output {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Outcome of a successful build, for display by the CLI.
#[derive(Debug)]
pub struct BuildReport {
    pub output: PathBuf,
    pub unused: Vec<PathBuf>,
}

/// Run one build: expand `entry`, write to `output`, report unused files
/// under `source_root`.
pub fn build(
    source_root: &Path,
    entry: &Path,
    output: &Path,
    minify: bool,
) -> Result<BuildReport, BuildError> {
    let content = fs::read_to_string(entry).map_err(|source| BuildError::ReadRoot {
        path: entry.to_path_buf(),
        source,
    })?;

    let mut used = BTreeSet::new();
    used.insert(paths::canonical(entry));

    let expanded = {
        let mut ctx = Context::new(minify, &mut used);
        expand::expand(&content, &mut ctx)
    };

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| BuildError::WriteOutput {
                path: output.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(output, &expanded).map_err(|source| BuildError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;

    let unused = report::find_unused(source_root, &used);
    Ok(BuildReport {
        output: output.to_path_buf(),
        unused,
    })
}
