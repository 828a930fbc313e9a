//! Inline rewriting: bold, italic, images, links.
//!
//! Consecutive prose lines form a run that is rewritten as one piece, so a
//! span may continue across a soft line break. Blank lines, placeholder
//! lines and block lines stand alone: a span never reaches into a heading,
//! a list item or a stored fragment.

pub mod emphasis;
pub mod links;

pub use emphasis::{emphasis, strong};
pub use links::{images, links};

use crate::block::paragraph;
use crate::{HtmlWriter, Options, Placeholder};

/// Apply the inline rewrites to `input`, in order: bold, italic, images,
/// links.
pub fn render(input: &str, options: &Options) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    let mut run_start: Option<usize> = None;
    let mut offset = 0;

    for line in input.split('\n') {
        if stands_alone(line) {
            if let Some(start) = run_start.take() {
                // run excludes the '\n' ending its last line
                rewrite_line(&mut writer, &input[start..offset - 1], options);
            }
            if Placeholder::parse(line).is_some() {
                writer.line(line);
            } else {
                rewrite_line(&mut writer, line, options);
            }
        } else if run_start.is_none() {
            run_start = Some(offset);
        }
        offset += line.len() + 1;
    }
    if let Some(start) = run_start {
        rewrite_line(&mut writer, &input[start..], options);
    }

    writer.finish_lines()
}

/// Lines that end a prose run.
fn stands_alone(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || Placeholder::parse(line).is_some()
        || paragraph::opening_tag(trimmed).is_some()
        || trimmed.starts_with("<li>")
        || trimmed.starts_with("</")
}

fn rewrite_line(writer: &mut HtmlWriter, text: &str, options: &Options) {
    let text = strong(text);
    let text = emphasis(&text);
    let text = images(&text, options);
    let text = links(&text, options);
    writer.line(&text);
}
