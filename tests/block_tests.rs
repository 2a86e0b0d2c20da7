use markdown2html::{Options, convert_source, to_html, to_html_with_options};

fn fragments(input: &str) -> Vec<String> {
    convert_source(input, &Options::default())
}

#[test]
fn test_heading_levels() {
    assert_eq!(fragments("## Title"), ["<h2>Title</h2>"]);
    assert_eq!(fragments("####### Seven"), ["<h7>Seven</h7>"]);
}

#[test]
fn test_heading_inline_markup() {
    assert_eq!(fragments("# Hello **World**"), ["<h1>Hello <b>World</b></h1>"]);
}

#[test]
fn test_unordered_list() {
    assert_eq!(
        fragments("- a\n- b\n"),
        ["<ul>", "<li>a</li>", "<li>b</li>", "</ul>"]
    );
}

#[test]
fn test_star_list_is_ordered() {
    assert_eq!(
        fragments("* a\n* b\n"),
        ["<ol>", "<li>a</li>", "<li>b</li>", "</ol>"]
    );
}

#[test]
fn test_conventional_lists() {
    let options = Options {
        legacy_list_kinds: false,
        ..Options::default()
    };
    assert_eq!(
        to_html_with_options("* a\n* b", &options),
        "<ul>\n<li>a</li>\n<li>b</li>\n</ul>"
    );
}

#[test]
fn test_paragraph_spanning_two_lines() {
    assert_eq!(
        fragments("first line\nsecond line\n\n"),
        ["<p>", "    first line", "second line", "</p>", ""]
    );
}

#[test]
fn test_two_paragraphs() {
    assert_eq!(
        fragments("one\n\ntwo"),
        ["<p>", "    one", "</p>", "", "<p>", "    two", "</p>"]
    );
}

#[test]
fn test_unclosed_list_at_end() {
    assert_eq!(fragments("- a"), ["<ul>", "<li>a</li>", "</ul>"]);
}

#[test]
fn test_unclosed_paragraph_at_end() {
    assert_eq!(fragments("text"), ["<p>", "    text", "</p>"]);
}

#[test]
fn test_list_item_closes_paragraph() {
    assert_eq!(
        fragments("intro\n- item"),
        ["<p>", "    intro", "</p>", "<ul>", "<li>item</li>", "</ul>"]
    );
}

#[test]
fn test_new_list_after_blank_line_picks_its_own_kind() {
    assert_eq!(
        fragments("- a\n\n* b"),
        [
            "<ul>",
            "<li>a</li>",
            "</ul>",
            "",
            "<ol>",
            "<li>b</li>",
            "</ol>"
        ]
    );
}

#[test]
fn test_list_item_markup() {
    assert_eq!(
        fragments("- __em__ and ((gone))"),
        ["<ul>", "<li><em>em</em> and </li>", "</ul>"]
    );
}

#[test]
fn test_paragraph_markup_with_indent() {
    assert_eq!(
        fragments("**bold** start"),
        ["<p>", "    <b>bold</b> start", "</p>"]
    );
}

#[test]
fn test_joined_output_has_no_trailing_newline() {
    let html = to_html("# A\n");
    assert_eq!(html, "<h1>A</h1>");
}

#[test]
fn test_empty_document() {
    assert_eq!(to_html(""), "");
}

#[test]
fn test_full_document() {
    let input = "\
# Title

Some **bold** text
and __more__.

- one
- two

* first
* [[abc]]
";
    let expected = "\
<h1>Title</h1>

<p>
    Some <b>bold</b> text
and <em>more</em>.
</p>

<ul>
<li>one</li>
<li>two</li>
</ul>

<ol>
<li>first</li>
<li>900150983cd24fb0d6963f7d28e17f72</li>
</ol>";
    assert_eq!(to_html(input), expected);
}

#[test]
fn test_bare_markers_are_empty_items() {
    assert_eq!(
        fragments("text\n-\n*\nmore\n"),
        [
            "<p>",
            "    text",
            "</p>",
            "<ul>",
            "<li></li>",
            "<li></li>",
            "</ul>",
            "<p>",
            "    more",
            "</p>"
        ]
    );
}

#[test]
fn test_bare_marker_on_unterminated_last_line_is_text() {
    assert_eq!(fragments("- a\n-"), ["<ul>", "<li>a</li>", "</ul>", "<p>", "    -", "</p>"]);
}

#[test]
fn test_tab_after_marker() {
    assert_eq!(fragments("-\tx\n"), ["<ul>", "<li>x</li>", "</ul>"]);
}

#[test]
fn test_non_ascii_whitespace_after_marker() {
    assert_eq!(fragments("-\u{a0}x\n"), ["<ul>", "<li>x</li>", "</ul>"]);
}

#[test]
fn test_marker_followed_by_text_is_paragraph() {
    assert_eq!(fragments("-x\n"), ["<p>", "    -x", "</p>"]);
}

#[test]
fn test_lone_carriage_returns_split_lines() {
    assert_eq!(fragments("a\rb\r\r- c"), ["<p>", "    a", "b", "</p>", "", "<ul>", "<li>c</li>", "</ul>"]);
}
