//! The recursive content-expansion engine.
//!
//! [`expand`] is the single entry point: one call scans a text with each of
//! the three comment dialects in fixed order (markup, block, markdown), and
//! every inject command found fans out through [`inject_pattern`], which may
//! re-enter [`expand`] on a nested file's content one level deeper.
//!
//! ## Recursion bound
//!
//! Expansion is capped at [`MAX_DEPTH`] nested files. Beyond the cap the
//! subtree's input is returned unexpanded, directives intact, with a
//! diagnostic. A file that injects itself (directly or transitively) and a
//! legitimately deep inject chain are truncated identically; the bound does
//! not try to tell them apart.
//!
//! ## Usage tracking
//!
//! Every file consumed anywhere in the call tree is recorded once, by
//! canonical path, in the single usage set threaded through [`Context`]. The
//! unused-file report is computed against this set after the depth-0 call
//! returns. A file injected from several places is recorded once but
//! rendered each time; there is no render cache.

use crate::{content, directive, paths};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Nested-file expansion ceiling. The depth-0 document itself is not a
/// nested file, so up to eleven texts are scanned along one chain.
pub const MAX_DEPTH: usize = 10;

/// State threaded through one build's expansion call tree.
///
/// `minify` is fixed for the whole build. `used` is one set shared by
/// mutable reference; [`Context::child`] reborrows it rather than copying,
/// so insertions anywhere are visible build-wide.
pub struct Context<'a> {
    pub depth: usize,
    pub minify: bool,
    pub used: &'a mut BTreeSet<PathBuf>,
}

impl<'a> Context<'a> {
    /// Depth-0 context for a fresh build.
    pub fn new(minify: bool, used: &'a mut BTreeSet<PathBuf>) -> Self {
        Context { depth: 0, minify, used }
    }

    /// Context for expanding one nested file: same build, one level deeper.
    pub fn child(&mut self) -> Context<'_> {
        Context {
            depth: self.depth + 1,
            minify: self.minify,
            used: &mut *self.used,
        }
    }
}

/// Expand every inject directive in `content`, recursively.
///
/// The three dialect scans run once each, in fixed order; later scans see
/// the text produced by earlier ones. Past [`MAX_DEPTH`] the input comes
/// back unchanged.
pub fn expand(content: &str, ctx: &mut Context) -> String {
    if ctx.depth > MAX_DEPTH {
        eprintln!("maximum inject depth ({MAX_DEPTH}) reached; leaving content unexpanded");
        return content.to_string();
    }

    let mut text = content.to_string();
    for dialect in directive::SCAN_ORDER {
        text = directive::substitute(&text, dialect, |pattern| inject_pattern(pattern, ctx));
    }
    text
}

/// Resolve one inject pattern and render everything it matches.
///
/// Matches are sorted by path so output is deterministic regardless of
/// filesystem listing order, and joined with single newlines. Zero matches,
/// invalid patterns, and non-regular entries are diagnosed and degrade to an
/// empty (or shorter) substitution; none of them fail the build.
pub fn inject_pattern(pattern: &str, ctx: &mut Context) -> String {
    let normalized = paths::normalize_pattern(pattern);
    let entries = match glob::glob(&normalized) {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!("invalid inject pattern {pattern}: {err}");
            return String::new();
        }
    };

    let mut matches: Vec<PathBuf> = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => matches.push(path),
            Err(err) => eprintln!("skipping unreadable match for {pattern}: {err}"),
        }
    }
    matches.sort();

    if matches.is_empty() {
        eprintln!("no files matched the pattern {pattern}");
        return String::new();
    }

    let mut rendered = Vec::new();
    for path in &matches {
        if !path.is_file() {
            eprintln!("{} is not a file", path.display());
            continue;
        }
        ctx.used.insert(paths::canonical(path));
        match content::render(path, ctx) {
            Ok(piece) => rendered.push(piece),
            Err(err) => eprintln!("failed to read {}: {err}", path.display()),
        }
    }
    rendered.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{block_inject, markdown_inject, markup_inject, write_tree};
    use tempfile::TempDir;

    fn run(content: &str, minify: bool) -> (String, BTreeSet<PathBuf>) {
        let mut used = BTreeSet::new();
        let out = expand(content, &mut Context::new(minify, &mut used));
        (out, used)
    }

    #[test]
    fn plain_text_unchanged() {
        let (out, used) = run("no directives here", false);
        assert_eq!(out, "no directives here");
        assert!(used.is_empty());
    }

    #[test]
    fn injects_text_file() {
        let tmp = TempDir::new().unwrap();
        write_tree(tmp.path(), &[("greeting.txt", "hello")]);
        let doc = markup_inject(&tmp.path().join("greeting.txt").display().to_string());
        let (out, used) = run(&doc, false);
        assert_eq!(out, "hello");
        assert_eq!(used.len(), 1);
        assert!(used.contains(&paths::canonical(&tmp.path().join("greeting.txt"))));
    }

    #[test]
    fn multiple_matches_sorted_and_newline_joined() {
        let tmp = TempDir::new().unwrap();
        write_tree(tmp.path(), &[("b.txt", "beta"), ("a.txt", "alpha")]);
        let doc = markup_inject(&format!("{}/*.txt", tmp.path().display()));
        let (out, _) = run(&doc, false);
        assert_eq!(out, "alpha\nbeta");
    }

    #[test]
    fn zero_matches_yield_empty_substitution() {
        let tmp = TempDir::new().unwrap();
        let doc = format!(
            "x{}y",
            markup_inject(&format!("{}/*.missing", tmp.path().display()))
        );
        let (out, used) = run(&doc, false);
        assert_eq!(out, "xy");
        assert!(used.is_empty());
    }

    #[test]
    fn directory_match_skipped() {
        let tmp = TempDir::new().unwrap();
        write_tree(tmp.path(), &[("dir/inner.txt", "inner"), ("solo.txt", "solo")]);
        // `*` matches both the directory and the file; only the file renders.
        let doc = markup_inject(&format!("{}/*", tmp.path().display()));
        let (out, used) = run(&doc, false);
        assert_eq!(out, "solo");
        assert_eq!(used.len(), 1);
    }

    #[test]
    fn nested_injection_across_dialects() {
        let tmp = TempDir::new().unwrap();
        let inner = tmp.path().join("inner.txt");
        write_tree(
            tmp.path(),
            &[
                ("inner.txt", "deep"),
                ("outer.css", &block_inject(&inner.display().to_string())),
            ],
        );
        let doc = markup_inject(&tmp.path().join("outer.css").display().to_string());
        let (out, used) = run(&doc, false);
        assert_eq!(out, "deep");
        assert_eq!(used.len(), 2);
    }

    #[test]
    fn self_injection_truncates_at_depth_ceiling() {
        let tmp = TempDir::new().unwrap();
        let cyclic = tmp.path().join("cycle.txt");
        let body = format!("X{}", block_inject(&cyclic.display().to_string()));
        write_tree(tmp.path(), &[("cycle.txt", &body)]);

        let doc = markup_inject(&cyclic.display().to_string());
        let (out, _) = run(&doc, false);

        // Depths 1..=10 expand the directive; depth 11 returns it literally.
        assert_eq!(out.matches('X').count(), 11);
        assert_eq!(out.matches("inject").count(), 1);
    }

    #[test]
    fn file_used_via_two_directives_recorded_once() {
        let tmp = TempDir::new().unwrap();
        write_tree(tmp.path(), &[("twice.txt", "t")]);
        let pattern = tmp.path().join("twice.txt").display().to_string();
        let doc = format!("{}{}", markup_inject(&pattern), markup_inject(&pattern));
        let (out, used) = run(&doc, false);
        assert_eq!(out, "tt");
        assert_eq!(used.len(), 1);
    }

    #[test]
    fn markdown_dialect_injects_too() {
        let tmp = TempDir::new().unwrap();
        write_tree(tmp.path(), &[("note.txt", "from markdown dialect")]);
        let doc = markdown_inject(&tmp.path().join("note.txt").display().to_string());
        let (out, _) = run(&doc, false);
        assert_eq!(out, "from markdown dialect");
    }

    #[test]
    fn opaque_comments_survive_all_dialects() {
        let doc = "<!-- note -->/* note */[//]: # (note)";
        let (out, _) = run(doc, false);
        assert_eq!(out, doc);
    }
}
