use clap::Parser;
use siteweld::{build, output};
use std::path::Path;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "siteweld")]
#[command(about = "Build a single HTML document by expanding inject directives")]
#[command(long_about = "\
Build a single HTML document by expanding inject directives

Reads src/index.html, recursively replaces inject directives with the
rendered content of the files they match, writes docs/index.html, and lists
any source files the build never touched.

Directive syntax (one grammar, three comment dialects):

  <!-- inject \"src/partials/*.html\" here -->    in HTML and SVG
  /* inject \"src/style/*.css\" here */           in CSS and JS
  [//]: # (inject \"src/pages/*.md\" here)        in markdown

Rendering by file type:

  .jpg .jpeg .png .gif .bmp .webp    inlined as base64 <img> data URIs
  .svg                               expanded recursively, inlined as markup
  .md                                expanded recursively, rendered to HTML
  anything else                      expanded recursively, inlined as text

Comments that don't match the grammar pass through unchanged. Nesting is
capped at ten levels, so files may inject files that inject files; cycles
are cut off rather than looping.")]
#[command(version)]
struct Cli {
    /// Minify injected markup, scripts, and stylesheets
    #[arg(long)]
    minify: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = build::build(
        Path::new(build::SOURCE_ROOT),
        Path::new(build::ENTRY_PATH),
        Path::new(build::OUTPUT_PATH),
        cli.minify,
    );

    let report = match result {
        Ok(report) => report,
        Err(err) => {
            eprintln!("build failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    for line in output::format_build_summary(&report, cli.minify) {
        println!("{line}");
    }
    for line in output::format_unused_warning(&report.unused) {
        println!("{line}");
    }
    ExitCode::SUCCESS
}
