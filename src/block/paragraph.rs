//! Paragraph wrapping, the last pass over the line stream.
//!
//! Lines that begin a block element are passed through together with every
//! line up to the one carrying the matching closing tag. Outside such spans,
//! runs of prose lines separated by blank lines become `<p>` elements.

use crate::HtmlWriter;

/// Tags that open a block span.
const BLOCK_TAGS: [&str; 11] = [
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "ul",
    "ol",
    "table",
    "pre",
    "blockquote",
];

/// If a trimmed line starts with an opening block tag, return the tag name.
pub fn opening_tag(trimmed: &str) -> Option<&'static str> {
    let rest = trimmed.strip_prefix('<')?;
    BLOCK_TAGS.into_iter().find(|&tag| {
        rest.strip_prefix(tag)
            .and_then(|after| after.chars().next())
            .is_some_and(|c| c == '>' || c.is_whitespace())
    })
}

/// Check whether `line` contains `</tag>`.
pub fn closes(line: &str, tag: &str) -> bool {
    line.match_indices("</").any(|(at, _)| {
        line[at + 2..]
            .strip_prefix(tag)
            .is_some_and(|after| after.starts_with('>'))
    })
}

/// Pending paragraph text.
#[derive(Default)]
struct ParagraphState {
    content: String,
}

impl ParagraphState {
    fn add_line(&mut self, trimmed: &str) {
        if !self.content.is_empty() {
            self.content.push(' ');
        }
        self.content.push_str(trimmed);
    }

    fn flush(&mut self, writer: &mut HtmlWriter) {
        if self.content.is_empty() {
            return;
        }
        writer.paragraph(&self.content);
        writer.newline();
        self.content.clear();
    }
}

/// Wrap bare prose into paragraphs.
pub fn wrap(input: &str) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    let mut paragraph = ParagraphState::default();
    let mut open_block: Option<&'static str> = None;

    for line in input.split('\n') {
        if let Some(tag) = open_block {
            writer.line(line);
            if closes(line, tag) {
                open_block = None;
            }
            continue;
        }

        let trimmed = line.trim();
        if let Some(tag) = opening_tag(trimmed) {
            paragraph.flush(&mut writer);
            writer.line(line);
            if !closes(line, tag) {
                open_block = Some(tag);
            }
        } else if trimmed.is_empty() {
            paragraph.flush(&mut writer);
            writer.newline();
        } else {
            paragraph.add_line(trimmed);
        }
    }
    paragraph.flush(&mut writer);

    writer.finish_lines()
}
