//! Directive scanning and the inject command grammar.
//!
//! A directive is a comment-delimited span carrying either an inject command
//! or ordinary comment text. Three dialects share one command grammar:
//!
//! ```text
//! <!-- inject "src/partials/*.html" here -->     markup comment
//! /* inject "src/style/*.css" here */            block comment
//! [//]: # (inject "src/pages/*.md" here)         markdown comment
//! ```
//!
//! The markdown dialect ends at the first `)` after the opening marker, so a
//! pattern containing `)` truncates there. That quirk is part of the wire
//! format and is kept as-is.
//!
//! ## Scanning rules
//!
//! [`substitute`] walks a text strictly left to right, replacing each
//! well-formed, non-overlapping span. A start marker with no following end
//! marker stops the scan: the remainder is emitted verbatim. Comments whose
//! inner text does not parse as an inject command are reproduced
//! byte-for-byte, markers included, which makes the scan idempotent on texts
//! without inject commands.

/// One comment dialect's delimiter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub start: &'static str,
    pub end: &'static str,
}

/// HTML/XML comment dialect.
pub const MARKUP: Dialect = Dialect { start: "<!--", end: "-->" };

/// C-style block comment dialect (JS, CSS).
pub const BLOCK: Dialect = Dialect { start: "/*", end: "*/" };

/// Markdown "comment" dialect, a no-op link reference.
pub const MARKDOWN: Dialect = Dialect { start: "[//]: # (", end: ")" };

/// The fixed order in which one expansion pass scans the dialects.
/// Each dialect scans the text produced by the previous one exactly once.
pub const SCAN_ORDER: [Dialect; 3] = [MARKUP, BLOCK, MARKDOWN];

const COMMAND_PREFIX: &str = "inject \"";
const COMMAND_SUFFIX: &str = "\" here";

/// Parse a span's trimmed inner text as an inject command.
///
/// Only the exact, case-sensitive grammar `inject "<pattern>" here` with a
/// non-empty pattern matches. Anything else is an opaque comment and yields
/// `None`.
pub fn parse_inject(inner: &str) -> Option<&str> {
    let rest = inner.strip_prefix(COMMAND_PREFIX)?;
    let pattern = rest.strip_suffix(COMMAND_SUFFIX)?.trim();
    if pattern.is_empty() { None } else { Some(pattern) }
}

/// Replace every well-formed directive span of one dialect in `content`.
///
/// `inject` is called with the pattern of each inject command and returns the
/// substitution text. Opaque comments are copied through unchanged.
pub fn substitute<F>(content: &str, dialect: Dialect, mut inject: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut out = String::with_capacity(content.len());
    let mut idx = 0;
    while idx < content.len() {
        let Some(rel_start) = content[idx..].find(dialect.start) else {
            out.push_str(&content[idx..]);
            break;
        };
        let start = idx + rel_start;
        let inner_start = start + dialect.start.len();
        let Some(rel_end) = content[inner_start..].find(dialect.end) else {
            // Unterminated comment: the tail passes through verbatim.
            out.push_str(&content[idx..]);
            break;
        };
        let inner_end = inner_start + rel_end;
        let span_end = inner_end + dialect.end.len();

        out.push_str(&content[idx..start]);
        match parse_inject(content[inner_start..inner_end].trim()) {
            Some(pattern) => out.push_str(&inject(pattern)),
            None => out.push_str(&content[start..span_end]),
        }
        idx = span_end;
    }
    out
}
