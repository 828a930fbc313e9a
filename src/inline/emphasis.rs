//! Bold and italic spans.
//!
//! A span is a run of `*` delimiters, non-empty content free of `*`, and the
//! same run again. Matching is leftmost-first and non-overlapping; a failed
//! match at a `*` retries one byte further on.

use std::borrow::Cow;

use memchr::memchr;

use crate::HtmlWriter;

/// Rewrite `**text**` as `<strong>text</strong>`.
pub fn strong(line: &str) -> Cow<'_, str> {
    replace_spans(line, 2, HtmlWriter::strong)
}

/// Rewrite `*text*` as `<em>text</em>`.
///
/// Run after [`strong`] so a double-asterisk span is never split.
pub fn emphasis(line: &str) -> Cow<'_, str> {
    replace_spans(line, 1, HtmlWriter::em)
}

fn replace_spans(line: &str, run: usize, wrap: fn(&mut HtmlWriter, &str)) -> Cow<'_, str> {
    let bytes = line.as_bytes();
    let mut writer: Option<HtmlWriter> = None;
    let mut copied = 0;
    let mut pos = 0;

    while let Some(offset) = memchr(b'*', &bytes[pos..]) {
        let start = pos + offset;
        match match_span(bytes, start, run) {
            Some(content_end) => {
                let w = writer.get_or_insert_with(|| HtmlWriter::with_capacity_for(line.len()));
                w.write_str(&line[copied..start]);
                wrap(w, &line[start + run..content_end]);
                copied = content_end + run;
                pos = copied;
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

/// Match a span opening at `start`; returns where its content ends.
fn match_span(bytes: &[u8], start: usize, run: usize) -> Option<usize> {
    let open_end = start + run;
    if !bytes.get(start..open_end)?.iter().all(|&b| b == b'*') {
        return None;
    }
    let content_end = open_end + memchr(b'*', bytes.get(open_end..)?)?;
    if content_end == open_end {
        return None;
    }
    let closer = bytes.get(content_end..content_end + run)?;
    closer.iter().all(|&b| b == b'*').then_some(content_end)
}
