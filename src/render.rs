//! HTML output writer shared by every rendering pass.
//!
//! Passes are line-oriented: each one writes its output lines through
//! [`HtmlWriter::line`] and hands the text on with [`HtmlWriter::finish_lines`],
//! so the line count of a pass mirrors the `split('\n')` of its input.

use crate::escape;

/// Cell flavour inside a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// `<th>`
    Header,
    /// `<td>`
    Data,
}

impl CellKind {
    fn tag(self) -> &'static str {
        match self {
            CellKind::Header => "th",
            CellKind::Data => "td",
        }
    }
}

/// HTML output writer with a pre-allocated buffer.
///
/// # Example
/// ```
/// use mdpage::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(64);
/// writer.heading(2, "Title");
/// writer.newline();
/// writer.paragraph("Hello");
///
/// assert_eq!(writer.into_string(), "<h2>Title</h2>\n<p>Hello</p>");
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Markup roughly adds a quarter on top of the source text.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len + input_len / 4),
        }
    }

    /// Write a string without escaping.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write text content, escaping it when `escape` is set.
    #[inline]
    pub fn write_text(&mut self, text: &str, escape: bool) {
        if escape {
            escape::escape_text_into(&mut self.out, text);
        } else {
            self.out.push_str(text);
        }
    }

    /// Write an attribute value, escaping it when `escape` is set.
    #[inline]
    pub fn write_attr(&mut self, value: &str, escape: bool) {
        if escape {
            escape::escape_attr_into(&mut self.out, value);
        } else {
            self.out.push_str(value);
        }
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) {
        self.out.push('\n');
    }

    /// Write a full output line.
    #[inline]
    pub fn line(&mut self, s: &str) {
        self.out.push_str(s);
        self.out.push('\n');
    }

    /// Take ownership of the output.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    /// Take ownership of line-oriented output, dropping the terminator of
    /// the last line so `N` input lines come back as `N` output lines.
    #[inline]
    pub fn finish_lines(mut self) -> String {
        if self.out.ends_with('\n') {
            self.out.pop();
        }
        self.out
    }

    // --- Block elements ---

    /// Write `<hN>content</hN>`.
    #[inline]
    pub fn heading(&mut self, level: u8, content: &str) {
        debug_assert!((1..=6).contains(&level));
        let digit = char::from(b'0' + level);
        self.out.push_str("<h");
        self.out.push(digit);
        self.out.push('>');
        self.out.push_str(content);
        self.out.push_str("</h");
        self.out.push(digit);
        self.out.push('>');
    }

    /// Write `<p>text</p>`.
    #[inline]
    pub fn paragraph(&mut self, text: &str) {
        self.out.push_str("<p>");
        self.out.push_str(text);
        self.out.push_str("</p>");
    }

    /// Write a fenced code block: `<pre><code class="language-LANG">BODY</code></pre>`.
    pub fn code_block(&mut self, lang: &str, body: &str, escape: bool) {
        self.out.push_str("<pre><code class=\"language-");
        self.write_attr(lang, escape);
        self.out.push_str("\">");
        self.write_text(body, escape);
        self.out.push_str("</code></pre>");
    }

    /// Write list start line: `<ul>` or `<ol>`.
    #[inline]
    pub fn list_start(&mut self, tag: &'static str) {
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push_str(">\n");
    }

    /// Write list end line: `</ul>` or `</ol>`.
    #[inline]
    pub fn list_end(&mut self, tag: &'static str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push_str(">\n");
    }

    /// Write list item line: `<li>content</li>`.
    #[inline]
    pub fn list_item(&mut self, content: &str) {
        self.out.push_str("<li>");
        self.out.push_str(content);
        self.out.push_str("</li>\n");
    }

    /// Write table start: `<table>\n`
    #[inline]
    pub fn table_start(&mut self) {
        self.out.push_str("<table>\n");
    }

    /// Write table end: `</table>` (no newline, the caller owns the line).
    #[inline]
    pub fn table_end(&mut self) {
        self.out.push_str("</table>");
    }

    /// Write row start: `  <tr>\n`
    #[inline]
    pub fn row_start(&mut self) {
        self.out.push_str("  <tr>\n");
    }

    /// Write row end: `  </tr>\n`
    #[inline]
    pub fn row_end(&mut self) {
        self.out.push_str("  </tr>\n");
    }

    /// Write one cell line: `    <th>text</th>\n` or `    <td>text</td>\n`.
    #[inline]
    pub fn cell(&mut self, kind: CellKind, text: &str) {
        let tag = kind.tag();
        self.out.push_str("    <");
        self.out.push_str(tag);
        self.out.push('>');
        self.out.push_str(text);
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push_str(">\n");
    }

    // --- Inline elements ---

    /// Write `<strong>text</strong>`.
    #[inline]
    pub fn strong(&mut self, text: &str) {
        self.out.push_str("<strong>");
        self.out.push_str(text);
        self.out.push_str("</strong>");
    }

    /// Write `<em>text</em>`.
    #[inline]
    pub fn em(&mut self, text: &str) {
        self.out.push_str("<em>");
        self.out.push_str(text);
        self.out.push_str("</em>");
    }

    /// Write `<img src="src" alt="alt">`.
    pub fn image(&mut self, src: &str, alt: &str, escape: bool) {
        self.out.push_str("<img src=\"");
        self.write_attr(src, escape);
        self.out.push_str("\" alt=\"");
        self.write_attr(alt, escape);
        self.out.push_str("\">");
    }

    /// Write `<a href="href">text</a>`.
    pub fn link(&mut self, href: &str, text: &str, escape: bool) {
        self.out.push_str("<a href=\"");
        self.write_attr(href, escape);
        self.out.push_str("\">");
        self.out.push_str(text);
        self.out.push_str("</a>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_new() {
        assert!(HtmlWriter::default().into_string().is_empty());
    }

    #[test]
    fn test_writer_capacity() {
        let writer = HtmlWriter::with_capacity_for(1000);
        assert!(writer.out.capacity() >= 1250);
    }

    #[test]
    fn test_writer_heading_levels() {
        for level in 1..=6 {
            let mut writer = HtmlWriter::default();
            writer.heading(level, "T");
            assert_eq!(writer.into_string(), format!("<h{level}>T</h{level}>"));
        }
    }

    #[test]
    fn test_writer_code_block_verbatim() {
        let mut writer = HtmlWriter::default();
        writer.code_block("rust", "if a < b {}", false);
        assert_eq!(
            writer.into_string(),
            "<pre><code class=\"language-rust\">if a < b {}</code></pre>"
        );
    }

    #[test]
    fn test_writer_code_block_escaped() {
        let mut writer = HtmlWriter::default();
        writer.code_block("rust", "if a < b {}", true);
        assert_eq!(
            writer.into_string(),
            "<pre><code class=\"language-rust\">if a &lt; b {}</code></pre>"
        );
    }

    #[test]
    fn test_writer_list() {
        let mut writer = HtmlWriter::default();
        writer.list_start("ol");
        writer.list_item("one");
        writer.list_end("ol");
        assert_eq!(writer.into_string(), "<ol>\n<li>one</li>\n</ol>\n");
    }

    #[test]
    fn test_writer_table() {
        let mut writer = HtmlWriter::default();
        writer.table_start();
        writer.row_start();
        writer.cell(CellKind::Header, "A");
        writer.row_end();
        writer.table_end();
        assert_eq!(
            writer.into_string(),
            "<table>\n  <tr>\n    <th>A</th>\n  </tr>\n</table>"
        );
    }

    #[test]
    fn test_writer_link_escape_url() {
        let mut writer = HtmlWriter::default();
        writer.link("https://example.com?a=1&b=2", "x", true);
        assert_eq!(
            writer.into_string(),
            "<a href=\"https://example.com?a=1&amp;b=2\">x</a>"
        );
    }

    #[test]
    fn test_writer_image_verbatim() {
        let mut writer = HtmlWriter::default();
        writer.image("a.png?x=1&y=2", "logo", false);
        assert_eq!(writer.into_string(), "<img src=\"a.png?x=1&y=2\" alt=\"logo\">");
    }

    #[test]
    fn test_finish_lines_drops_last_terminator() {
        let mut writer = HtmlWriter::default();
        writer.line("a");
        writer.line("");
        assert_eq!(writer.finish_lines(), "a\n");
    }
}
