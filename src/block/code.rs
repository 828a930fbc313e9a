//! Fenced code block extraction.
//!
//! Runs first so nothing inside a fence is ever read as markdown.

use crate::HtmlWriter;
use crate::placeholder::{CodeBlock, PlaceholderStore};

const FENCE: &str = "```";

/// Language recorded for a fence without a tag.
pub const DEFAULT_LANG: &str = "text";

/// If `line` opens a fence, return its language tag (possibly empty).
///
/// The tag must follow the backticks directly and contain no spaces.
pub fn opening_fence(line: &str) -> Option<&str> {
    let tag = line.trim().strip_prefix(FENCE)?;
    tag.bytes().all(is_lang_byte).then_some(tag)
}

/// A closing fence is a line of exactly three backticks.
#[inline]
pub fn is_closing_fence(line: &str) -> bool {
    line.trim() == FENCE
}

#[inline]
fn is_lang_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'+' | b'.' | b'#')
}

/// Replace every closed fenced block with a placeholder line.
///
/// An opening fence with no closing fence after it is left as text.
pub fn extract(input: &str, store: &mut PlaceholderStore) -> String {
    let lines: Vec<&str> = input.split('\n').collect();
    let mut writer = HtmlWriter::with_capacity_for(input.len());

    // Set once a search finds no closing fence; later searches would fail too.
    let mut closes_exhausted = false;
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        let fenced = match opening_fence(line) {
            Some(tag) if !closes_exhausted => {
                let close = lines[i + 1..].iter().position(|l| is_closing_fence(l));
                closes_exhausted = close.is_none();
                close.map(|close| (tag, close))
            }
            _ => None,
        };

        match fenced {
            Some((tag, close)) => {
                let body = lines[i + 1..i + 1 + close].join("\n");
                let lang = if tag.is_empty() { DEFAULT_LANG } else { tag };
                let token = store.push_code(CodeBlock {
                    lang: lang.to_owned(),
                    body,
                });
                writer.line(&token.to_string());
                // opening line + body + closing line
                i += close + 2;
            }
            None => {
                writer.line(line);
                i += 1;
            }
        }
    }

    writer.finish_lines()
}
