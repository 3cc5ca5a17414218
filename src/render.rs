//! Markdown rendering and minification.
//!
//! The expansion engine depends only on the four narrow functions here, so
//! swapping a concrete renderer or minifier touches nothing else. Concrete
//! implementations:
//!
//! - markdown → HTML: [pulldown-cmark](https://docs.rs/pulldown-cmark), with
//!   raw inline HTML passed through unescaped so injected markup survives
//!   rendering
//! - markup (HTML/SVG): [minify-html](https://docs.rs/minify-html)
//! - scripts: [minify-js](https://docs.rs/minify-js)
//! - stylesheets: [css-minify](https://docs.rs/css-minify)
//!
//! Minifier failures are recoverable by contract: callers log and keep the
//! unminified text.

use css_minify::optimizations::{Level, Minifier};
use minify_js::{Session, TopLevelMode};
use pulldown_cmark::{Parser, html as md_html};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MinifyError {
    #[error("minified markup is not valid UTF-8: {0}")]
    Markup(#[from] std::string::FromUtf8Error),
    #[error("script error: {0}")]
    Script(String),
    #[error("stylesheet error: {0}")]
    Stylesheet(String),
}

/// Render markdown to HTML. Raw inline HTML is emitted unescaped.
pub fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut html = String::new();
    md_html::push_html(&mut html, parser);
    html
}

/// Minify HTML or SVG markup.
///
/// Closing tags are kept so SVG stays well-formed after minification.
pub fn minify_markup(markup: &str) -> Result<String, MinifyError> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    let minified = minify_html::minify(markup.as_bytes(), &cfg);
    Ok(String::from_utf8(minified)?)
}

/// Minify JavaScript. Fails on syntax errors.
pub fn minify_script(script: &str) -> Result<String, MinifyError> {
    let session = Session::new();
    let mut out = Vec::new();
    minify_js::minify(&session, TopLevelMode::Global, script.as_bytes(), &mut out)
        .map_err(|err| MinifyError::Script(format!("{err:?}")))?;
    String::from_utf8(out).map_err(|err| MinifyError::Script(err.to_string()))
}

/// Minify CSS. Level two applies only behavior-preserving optimizations.
pub fn minify_stylesheet(stylesheet: &str) -> Result<String, MinifyError> {
    Minifier::default()
        .minify(stylesheet, Level::Two)
        .map_err(|err| MinifyError::Stylesheet(format!("{err:?}")))
}
