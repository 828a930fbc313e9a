//! ATX headings.

use crate::HtmlWriter;

/// Parse an ATX heading line into `(level, content)`.
///
/// One to six `#` at the very start of the line, then at least one
/// whitespace character. Content runs to the end of the line.
pub fn heading_level(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let rest = &line[hashes..];
    let content = rest.trim_start();
    if content.len() == rest.len() {
        return None;
    }
    Some((hashes as u8, content))
}

/// Rewrite heading lines as `<hN>…</hN>`.
pub fn render(input: &str) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    for line in input.split('\n') {
        match heading_level(line) {
            Some((level, content)) => {
                writer.heading(level, content);
                writer.newline();
            }
            None => writer.line(line),
        }
    }
    writer.finish_lines()
}

/// Content of the first level-1 heading, used as the page title.
pub fn first_title(input: &str) -> Option<&str> {
    input.split('\n').find_map(|line| match heading_level(line) {
        Some((1, content)) => Some(content.trim_end()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        assert_eq!(heading_level("# One"), Some((1, "One")));
        assert_eq!(heading_level("###\tThree"), Some((3, "Three")));
        assert_eq!(heading_level("###### Six"), Some((6, "Six")));
        assert_eq!(heading_level("#    Spaced"), Some((1, "Spaced")));
    }

    #[test]
    fn test_not_headings() {
        assert_eq!(heading_level("####### Seven"), None);
        assert_eq!(heading_level("#NoSpace"), None);
        assert_eq!(heading_level(" # Indented"), None);
        assert_eq!(heading_level("#"), None);
    }

    #[test]
    fn test_empty_heading() {
        assert_eq!(heading_level("## "), Some((2, "")));
    }

    #[test]
    fn test_render() {
        assert_eq!(
            render("# A\ntext\n## B"),
            "<h1>A</h1>\ntext\n<h2>B</h2>"
        );
    }

    #[test]
    fn test_first_title_skips_other_levels() {
        assert_eq!(first_title("## Sub\n# Main  \n# Later"), Some("Main"));
        assert_eq!(first_title("no headings"), None);
    }
}
