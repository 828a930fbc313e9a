//! Flat ordered and unordered lists.
//!
//! Indentation is not interpreted and lists never nest: a line is either an
//! item or it closes whatever list is open.

use crate::HtmlWriter;

/// Kind of list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `*`, `+` or `-` marker.
    Unordered,
    /// `1.` style marker.
    Ordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// Parse a list item line into its kind and content.
pub fn list_item(line: &str) -> Option<(ListKind, &str)> {
    let trimmed = line.trim();
    let bytes = trimmed.as_bytes();

    let (kind, marker_len) = match bytes.first()? {
        b'*' | b'+' | b'-' => (ListKind::Unordered, 1),
        b'0'..=b'9' => {
            let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
            if bytes.get(digits) != Some(&b'.') {
                return None;
            }
            (ListKind::Ordered, digits + 1)
        }
        _ => return None,
    };

    let rest = &trimmed[marker_len..];
    let content = rest.trim_start();
    if content.len() == rest.len() {
        return None;
    }
    Some((kind, content))
}

/// Items collected for the list currently open.
struct OpenList<'a> {
    kind: ListKind,
    items: Vec<&'a str>,
}

impl OpenList<'_> {
    fn write(&self, writer: &mut HtmlWriter) {
        let tag = self.kind.tag();
        writer.list_start(tag);
        for item in &self.items {
            writer.list_item(item);
        }
        writer.list_end(tag);
    }
}

/// Group consecutive item lines into `<ul>`/`<ol>` blocks.
pub fn render(input: &str) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    let mut open: Option<OpenList<'_>> = None;

    for line in input.split('\n') {
        match list_item(line) {
            Some((kind, content)) => match open.as_mut() {
                Some(list) if list.kind == kind => list.items.push(content),
                _ => {
                    if let Some(list) = open.take() {
                        list.write(&mut writer);
                    }
                    open = Some(OpenList {
                        kind,
                        items: vec![content],
                    });
                }
            },
            None => {
                if let Some(list) = open.take() {
                    list.write(&mut writer);
                }
                writer.line(line);
            }
        }
    }
    if let Some(list) = open.take() {
        list.write(&mut writer);
    }

    writer.finish_lines()
}
