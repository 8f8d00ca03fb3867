use super::*;

#[test]
fn renders_headings_and_emphasis() {
    let html = render_markdown_html("## Title\n\nSome **bold** text.");
    assert!(html.contains("<h2>Title</h2>"));
    assert!(html.contains("<strong>bold</strong>"));
}

#[test]
fn strips_raw_html() {
    let html = render_markdown_html("before <script>alert(1)</script> after\n\n<div>block</div>");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<div>"));
    assert!(html.contains("before"));
}

#[test]
fn escapes_text_content() {
    let html = render_markdown_html("a < b && c");
    assert!(html.contains("a &lt; b &amp;&amp; c"));
}

#[test]
fn empty_input_renders_nothing() {
    assert_eq!(render_markdown_html(""), "");
}
