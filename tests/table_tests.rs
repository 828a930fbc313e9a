//! Pipe table tests.

use mdpage::to_html;

#[test]
fn header_separator_and_body() {
    let input = "| A | B |\n|---|---|\n| 1 | 2 |";
    let expected = "<table>\n  <tr>\n    <th>A</th>\n    <th>B</th>\n  </tr>\n  <tr>\n    <td>1</td>\n    <td>2</td>\n  </tr>\n</table>";
    assert_eq!(to_html(input), expected);
}

#[test]
fn first_row_is_header_without_separator() {
    let input = "| a |\n| b |";
    let expected = "<table>\n  <tr>\n    <th>a</th>\n  </tr>\n  <tr>\n    <td>b</td>\n  </tr>\n</table>";
    assert_eq!(to_html(input), expected);
}

#[test]
fn leading_separator_suppresses_header() {
    let input = "|---|\n| a |";
    let expected = "<table>\n  <tr>\n    <td>a</td>\n  </tr>\n</table>";
    assert_eq!(to_html(input), expected);
}

#[test]
fn spacer_lines_do_not_split_a_table() {
    let input = "| h |\n|---|\n| 1 |\n\n| 2 |";
    let expected = "<table>\n  <tr>\n    <th>h</th>\n  </tr>\n  <tr>\n    <td>1</td>\n  </tr>\n  <tr>\n    <td>2</td>\n  </tr>\n</table>";
    assert_eq!(to_html(input), expected);
}

#[test]
fn cells_are_not_inline_rendered() {
    let input = "| **x** |\n|---|\n| [a](b) |";
    let expected = "<table>\n  <tr>\n    <th>**x**</th>\n  </tr>\n  <tr>\n    <td>[a](b)</td>\n  </tr>\n</table>";
    assert_eq!(to_html(input), expected);
}

#[test]
fn text_after_table_is_a_paragraph() {
    let input = "Intro:\n| a |\n\nOutro.";
    let expected = "<p>Intro:</p>\n<table>\n  <tr>\n    <th>a</th>\n  </tr>\n</table>\n<p>Outro.</p>";
    assert_eq!(to_html(input), expected);
}

#[test]
fn indented_rows_still_form_a_table() {
    let input = "  | a | b |  \n  |---|---|";
    let expected = "<table>\n  <tr>\n    <th>a</th>\n    <th>b</th>\n  </tr>\n</table>";
    assert_eq!(to_html(input), expected);
}

#[test]
fn empty_cells_are_kept() {
    let input = "| a | | c |";
    let expected = "<table>\n  <tr>\n    <th>a</th>\n    <th></th>\n    <th>c</th>\n  </tr>\n</table>";
    assert_eq!(to_html(input), expected);
}

#[test]
fn two_tables_separated_by_text() {
    let html = to_html("| a |\nbetween\n| b |");
    assert_eq!(html.matches("<table>").count(), 2);
    assert!(html.contains("<p>between</p>"));
}
