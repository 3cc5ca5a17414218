//! Content classification and per-kind rendering of matched files.
//!
//! Each matched file is classified exactly once, from its lower-cased
//! extension, into one of four kinds:
//!
//! | Kind | Extensions | Rendering |
//! |------|------------|-----------|
//! | Image | jpg jpeg png gif bmp webp | base64 data-URI `<img>` tag; never recursed, never minified |
//! | Vector | svg | recursive expansion, then markup minifier |
//! | Markdown | md | recursive expansion of the *raw* markdown, then HTML rendering, then markup minifier |
//! | Text | everything else | recursive expansion, then a minifier picked by extension (js/css/html) |
//!
//! Markdown expands before rendering so injected text participates in
//! markdown syntax. Minifier failures log and fall back to the unminified
//! expanded text.

use crate::expand::{self, Context};
use crate::render::{self, MinifyError};
use crate::mime;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use maud::html;
use std::fs;
use std::io;
use std::path::Path;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Rendering strategy for a matched file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Image,
    Vector,
    Markdown,
    Text,
}

impl ContentKind {
    /// Classify a path by its lower-cased extension.
    pub fn classify(path: &Path) -> Self {
        let ext = path.extension().map(|e| e.to_ascii_lowercase());
        match ext.as_deref().and_then(|e| e.to_str()) {
            Some(ext) if IMAGE_EXTENSIONS.contains(&ext) => ContentKind::Image,
            Some("svg") => ContentKind::Vector,
            Some("md") => ContentKind::Markdown,
            _ => ContentKind::Text,
        }
    }
}

/// Render one matched file according to its content kind.
///
/// The only error surfaced here is an I/O failure on the file itself; the
/// caller diagnoses it and skips the file.
pub fn render(path: &Path, ctx: &mut Context) -> io::Result<String> {
    match ContentKind::classify(path) {
        ContentKind::Image => render_image(path),
        ContentKind::Vector => render_vector(path, ctx),
        ContentKind::Markdown => render_markdown(path, ctx),
        ContentKind::Text => render_text(path, ctx),
    }
}

/// Inline an image as a data URI, byte-for-byte.
fn render_image(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    let data_uri = format!(
        "data:{};base64,{}",
        mime::mime_type(path),
        BASE64.encode(&bytes)
    );
    let alt = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(html! { img src=(data_uri) alt=(alt); }.into_string())
}

fn render_vector(path: &Path, ctx: &mut Context) -> io::Result<String> {
    let svg = fs::read_to_string(path)?;
    let expanded = expand::expand(&svg, &mut ctx.child());
    Ok(minify_or_keep(expanded, path, render::minify_markup, ctx.minify))
}

fn render_markdown(path: &Path, ctx: &mut Context) -> io::Result<String> {
    let markdown = fs::read_to_string(path)?;
    // Expanded first so injected text takes part in markdown syntax.
    let expanded = expand::expand(&markdown, &mut ctx.child());
    let html = render::render_markdown(&expanded);
    Ok(minify_or_keep(html, path, render::minify_markup, ctx.minify))
}

fn render_text(path: &Path, ctx: &mut Context) -> io::Result<String> {
    let text = fs::read_to_string(path)?;
    let expanded = expand::expand(&text, &mut ctx.child());
    if !ctx.minify {
        return Ok(expanded);
    }
    let ext = path.extension().map(|e| e.to_ascii_lowercase());
    let minifier = match ext.as_deref().and_then(|e| e.to_str()) {
        Some("js") => render::minify_script,
        Some("css") => render::minify_stylesheet,
        Some("html") => render::minify_markup,
        _ => return Ok(expanded),
    };
    Ok(minify_or_keep(expanded, path, minifier, true))
}

/// Apply a minifier, keeping the input when it fails or when minification
/// is disabled.
fn minify_or_keep(
    text: String,
    path: &Path,
    minifier: fn(&str) -> Result<String, MinifyError>,
    minify: bool,
) -> String {
    if !minify {
        return text;
    }
    match minifier(&text) {
        Ok(minified) => minified,
        Err(err) => {
            eprintln!(
                "failed to minify {}: {err}; keeping unminified content",
                path.display()
            );
            text
        }
    }
}
