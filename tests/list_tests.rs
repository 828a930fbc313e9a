//! List tests.

use mdpage::to_html;

#[test]
fn unordered_list_closed_before_blank_line() {
    let input = "- item1\n- item2\n\nAfter.";
    let expected = "<ul>\n<li>item1</li>\n<li>item2</li>\n</ul>\n\n<p>After.</p>";
    assert_eq!(to_html(input), expected);
}

#[test]
fn all_unordered_markers_share_a_list() {
    let input = "* a\n+ b\n- c";
    let expected = "<ul>\n<li>a</li>\n<li>b</li>\n<li>c</li>\n</ul>";
    assert_eq!(to_html(input), expected);
}

#[test]
fn ordered_list() {
    let input = "1. first\n2. second\n10. tenth";
    let expected = "<ol>\n<li>first</li>\n<li>second</li>\n<li>tenth</li>\n</ol>";
    assert_eq!(to_html(input), expected);
}

#[test]
fn kind_switch_starts_new_list() {
    let input = "- a\n1. b\n- c";
    let expected = "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n</ol>\n<ul>\n<li>c</li>\n</ul>";
    assert_eq!(to_html(input), expected);
}

#[test]
fn indentation_is_flattened() {
    let input = "- top\n    - nested";
    let expected = "<ul>\n<li>top</li>\n<li>nested</li>\n</ul>";
    assert_eq!(to_html(input), expected);
}

#[test]
fn text_line_closes_list() {
    let input = "Steps:\n- one\nDone.";
    let expected = "<p>Steps:</p>\n<ul>\n<li>one</li>\n</ul>\n<p>Done.</p>";
    assert_eq!(to_html(input), expected);
}

#[test]
fn items_get_inline_formatting() {
    let input = "- **bold** item\n- see [docs](https://docs.rs)";
    let expected = "<ul>\n<li><strong>bold</strong> item</li>\n<li>see <a href=\"https://docs.rs\">docs</a></li>\n</ul>";
    assert_eq!(to_html(input), expected);
}

#[test]
fn emphasis_line_is_not_an_item() {
    assert_eq!(to_html("*note* this"), "<p><em>note</em> this</p>");
}
