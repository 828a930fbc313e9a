//! Images `![alt](src)` and links `[text](href)`.

use std::borrow::Cow;
use std::ops::Range;

use memchr::memchr;

use crate::{HtmlWriter, Options};

/// A matched `[text](url)` construct, as byte ranges into the line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LinkSpan {
    text: Range<usize>,
    url: Range<usize>,
    end: usize,
}

/// Rewrite `![alt](src)` as `<img src="src" alt="alt">`.
pub fn images<'a>(line: &'a str, options: &Options) -> Cow<'a, str> {
    replace_links(line, b'!', |writer, span| {
        writer.image(&line[span.url.clone()], &line[span.text.clone()], options.escape_html);
    })
}

/// Rewrite `[text](href)` as `<a href="href">text</a>`.
///
/// Run after [`images`]; otherwise the bracket part of an image would be
/// taken for a link.
pub fn links<'a>(line: &'a str, options: &Options) -> Cow<'a, str> {
    replace_links(line, b'[', |writer, span| {
        writer.link(&line[span.url.clone()], &line[span.text.clone()], options.escape_html);
    })
}

fn replace_links<'a>(
    line: &'a str,
    trigger: u8,
    mut emit: impl FnMut(&mut HtmlWriter, &LinkSpan),
) -> Cow<'a, str> {
    let bytes = line.as_bytes();
    let mut writer: Option<HtmlWriter> = None;
    let mut copied = 0;
    let mut pos = 0;

    while let Some(offset) = memchr(trigger, &bytes[pos..]) {
        let start = pos + offset;
        let bracket = if trigger == b'!' { start + 1 } else { start };
        match match_link(bytes, bracket) {
            Some(span) => {
                let w = writer.get_or_insert_with(|| HtmlWriter::with_capacity_for(line.len()));
                w.write_str(&line[copied..start]);
                emit(w, &span);
                copied = span.end;
                pos = span.end;
            }
            None => pos = start + 1,
        }
    }

    match writer {
        None => Cow::Borrowed(line),
        Some(mut w) => {
            w.write_str(&line[copied..]);
            Cow::Owned(w.into_string())
        }
    }
}

/// Match `[text](url)` with the `[` at `open`. Text may not contain `]`,
/// url may not contain `)`, and neither may be empty.
fn match_link(bytes: &[u8], open: usize) -> Option<LinkSpan> {
    if bytes.get(open) != Some(&b'[') {
        return None;
    }
    let text_start = open + 1;
    let text_end = text_start + memchr(b']', bytes.get(text_start..)?)?;
    if text_end == text_start || bytes.get(text_end + 1) != Some(&b'(') {
        return None;
    }
    let url_start = text_end + 2;
    let url_end = url_start + memchr(b')', bytes.get(url_start..)?)?;
    if url_end == url_start {
        return None;
    }
    Some(LinkSpan {
        text: text_start..text_end,
        url: url_start..url_end,
        end: url_end + 1,
    })
}
