//! mdpage: Markdown to styled standalone HTML page converter
//!
//! Turns one markdown document into a single HTML page with an embedded
//! stylesheet, ready to open in a browser or print to PDF.
//!
//! # Design Principles
//! - No AST: the document stays a string of lines from pass to pass
//! - Fenced code and tables are lifted behind placeholder tokens first and
//!   restored last, so no other pass ever rewrites them
//! - Every pass is a single forward scan over lines
//! - Rendering is a pure function; only [`convert_file`] touches the disk
//!
//! # Pipeline
//! 1. fenced code blocks → placeholders ([`block::code`])
//! 2. pipe tables → placeholders ([`block::table`])
//! 3. ATX headings ([`block::heading`])
//! 4. lists ([`block::list`])
//! 5. bold, italic, images, links ([`inline`])
//! 6. placeholders → `<pre><code>` and `<table>` ([`placeholder`])
//! 7. paragraphs ([`block::paragraph`])
//! 8. page template ([`document`])

pub mod block;
pub mod convert;
pub mod document;
pub mod error;
pub mod escape;
pub mod inline;
pub mod placeholder;
pub mod render;

use std::borrow::Cow;

use tracing::debug;

// Re-export primary types
pub use convert::{Conversion, convert_file};
pub use document::Shell;
pub use error::{Error, Result};
pub use placeholder::{CodeBlock, Placeholder, PlaceholderStore};
pub use render::HtmlWriter;

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// HTML-escape code block bodies and link/image attributes.
    ///
    /// Off by default: those spans are spliced in verbatim, matching the
    /// output the converter has always produced.
    pub escape_html: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { escape_html: false }
    }
}

/// Convert Markdown to an HTML body fragment.
///
/// # Example
/// ```
/// let html = mdpage::to_html("# Hello\n\nWorld");
/// assert_eq!(html, "<h1>Hello</h1>\n\n<p>World</p>");
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert Markdown to an HTML body fragment with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    render(input, options).body
}

/// Convert Markdown to a complete HTML page with the default shell.
///
/// # Example
/// ```
/// let page = mdpage::to_document("# Report\n\nAll good.");
/// assert!(page.starts_with("<!DOCTYPE html>"));
/// assert!(page.contains("<title>Report</title>"));
/// assert!(page.contains("<p>All good.</p>"));
/// ```
pub fn to_document(input: &str) -> String {
    to_document_with(input, &Options::default(), &Shell::default())
}

/// Convert Markdown to a complete HTML page.
pub fn to_document_with(input: &str, options: &Options, shell: &Shell) -> String {
    let rendered = render(input, options);
    shell.wrap(&rendered.body, rendered.title.as_deref())
}

/// Output of the rendering pipeline.
struct Rendered {
    body: String,
    /// First level-1 heading outside code blocks, raw.
    title: Option<String>,
}

/// Run every pass in order.
fn render(input: &str, options: &Options) -> Rendered {
    let input = normalize_line_endings(input);
    let input = placeholder::strip_sentinels(&input);
    let mut store = PlaceholderStore::new();

    let text = block::code::extract(&input, &mut store);
    let text = block::table::extract(&text, &mut store);
    debug!(
        code_blocks = store.code_block_count(),
        tables = store.table_count(),
        "extracted fragments"
    );
    let title = block::heading::first_title(&text).map(str::to_owned);

    let text = block::heading::render(&text);
    let text = block::list::render(&text);
    let text = inline::render(&text, options);
    let text = store.restore(&text, options);
    let body = block::paragraph::wrap(&text);

    Rendered { body, title }
}

/// Fold `\r\n` into `\n` so every pass splits on a single byte.
fn normalize_line_endings(input: &str) -> Cow<'_, str> {
    if memchr::memchr(b'\r', input.as_bytes()).is_some() {
        Cow::Owned(input.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(input)
    }
}
