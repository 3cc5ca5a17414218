//! # siteweld
//!
//! A single-document site builder: one HTML file in, one HTML file out.
//! Source files (markup partials, stylesheets, scripts, markdown pages,
//! images) are pulled into the root document through `inject` directives
//! written as ordinary comments, so the source tree previews correctly in
//! any editor while the build flattens it into a self-contained page.
//!
//! # Architecture: Recursive Expansion
//!
//! A build is one recursive pass over the root document:
//!
//! ```text
//! src/index.html ─┬─ <!-- inject "src/partials/*.html" here -->
//!                 ├─ /* inject "src/style/*.css" here */
//!                 └─ [//]: # (inject "src/pages/*.md" here)
//!                        │
//!                        ▼  glob → sort → classify → render (recurse)
//!                 docs/index.html
//! ```
//!
//! Each expansion call scans the text with three comment dialects in fixed
//! order (markup, block, markdown), resolves every inject command's glob
//! pattern to sorted files, and renders each file by content kind: images
//! become base64 data URIs, SVG and text re-enter the expansion one level
//! deeper, and markdown expands first and renders to HTML afterwards. Depth is
//! capped at ten nested files, which also breaks inject cycles.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`directive`] | Comment dialects, span scanning, the `inject "…" here` grammar |
//! | [`expand`] | Recursion context, three-dialect pipeline, pattern expansion, depth guard |
//! | [`content`] | Content-kind classification and per-kind rendering |
//! | [`render`] | Markdown renderer and the three minifier seams |
//! | [`mime`] | Extension → MIME lookup for image data URIs |
//! | [`paths`] | Canonical paths and glob-pattern normalization |
//! | [`report`] | Post-build unused-file listing |
//! | [`build`] | Build orchestration and the fatal error taxonomy |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Comments as the Directive Syntax
//!
//! Directives ride inside each format's native comment form, so an
//! unprocessed source file is still valid HTML, CSS, JS, or markdown.
//! Comments that do not match the inject grammar pass through
//! byte-for-byte; the build never rewrites anything it does not own.
//!
//! ## Depth Ceiling Instead of Cycle Detection
//!
//! Expansion depth is bounded at ten nested files. A file that injects
//! itself and a legitimately deep inject chain are truncated the same way:
//! the offending subtree's text is emitted with its directives intact and a
//! diagnostic is logged. The build always terminates and always produces
//! output.
//!
//! ## One Build-Wide Usage Set
//!
//! Every file consumed anywhere in the expansion is recorded (once, by
//! canonical path) in a single set threaded by mutable reference through
//! the whole call tree. After the build, the source root is walked and the
//! leftovers are listed: a dead-file report with no global state.
//!
//! ## Forgiving by Default
//!
//! Only the root document's I/O can fail a build. Unmatched patterns,
//! directory matches, unreadable nested files, and minifier failures are
//! each diagnosed at the point of detection and degrade to a well-defined
//! fallback (empty substitution, skip, unminified text). A broken partial
//! costs you that partial, not the site.

pub mod build;
pub mod content;
pub mod directive;
pub mod expand;
pub mod mime;
pub mod output;
pub mod paths;
pub mod render;
pub mod report;

#[cfg(test)]
pub(crate) mod test_helpers;
