use super::*;

#[test]
fn renders_heading_and_emphasis() {
    let out = render_markdown_html("# Title\n\nSome **bold** text");
    assert!(out.contains("<h1>Title</h1>"));
    assert!(out.contains("<strong>bold</strong>"));
}

#[test]
fn renders_tables() {
    let out = render_markdown_html("| a | b |\n|---|---|\n| 1 | 2 |\n");
    assert!(out.contains("<table>"));
    assert!(out.contains("<td>1</td>"));
}

#[test]
fn renders_strikethrough() {
    let out = render_markdown_html("~~gone~~");
    assert!(out.contains("<del>gone</del>"));
}

#[test]
fn drops_inline_html() {
    let out = render_markdown_html("hello <script>alert(1)</script> world");
    assert!(!out.contains("<script>"));
    assert!(out.contains("hello"));
    assert!(out.contains("world"));
}

#[test]
fn drops_block_html() {
    let out = render_markdown_html("<div onclick=\"x()\">boom</div>\n\nafter");
    assert!(!out.contains("<div"));
    assert!(out.contains("<p>after</p>"));
}

#[test]
fn escapes_text_content() {
    let out = render_markdown_html("a < b & c");
    assert!(out.contains("a &lt; b &amp; c"));
}

#[test]
fn empty_source_renders_empty() {
    assert_eq!(render_markdown_html(""), "");
}

#[test]
fn javascript_link_destination_is_neutralized() {
    let out = render_markdown_html("[click](javascript:alert(document.cookie))");
    assert!(!out.contains("javascript:"));
    assert!(out.contains(r##"<a href="#">click</a>"##));
}

#[test]
fn javascript_image_source_is_neutralized() {
    let out = render_markdown_html("![x](javascript:alert(1))");
    assert!(!out.contains("src=\"javascript:"));
    assert!(out.contains(r##"src="#""##));
}

#[test]
fn javascript_autolink_is_neutralized() {
    let out = render_markdown_html("<javascript:alert(2)>");
    assert!(!out.contains("href=\"javascript:"));
    assert!(out.contains(r##"href="#""##));
}

#[test]
fn mixed_case_and_data_schemes_are_neutralized() {
    assert!(!render_markdown_html("[a](JavaScript:alert(1))").contains("JavaScript:"));
    assert!(!render_markdown_html("[a](data:text/html;base64,AAAA)").contains("data:"));
    assert!(!render_markdown_html("[a](vbscript:x)").contains("vbscript:"));
}

#[test]
fn allowed_destinations_pass_through() {
    let out = render_markdown_html("[site](https://example.com/a?b=c) [mail](mailto:a@b.c) [rel](/posts/1)");
    assert!(out.contains(r#"href="https://example.com/a?b=c""#));
    assert!(out.contains(r#"href="mailto:a@b.c""#));
    assert!(out.contains(r#"href="/posts/1""#));

    let img = render_markdown_html("![pic](http://example.com/p.png)");
    assert!(img.contains(r#"src="http://example.com/p.png""#));
}

#[test]
fn destination_scheme_check() {
    assert!(is_safe_destination("https://example.com"));
    assert!(is_safe_destination("HTTP://example.com"));
    assert!(is_safe_destination("images/a.png"));
    assert!(is_safe_destination("#section"));
    assert!(is_safe_destination("/search?q=a:b"));
    assert!(is_safe_destination("./a:b"));
    assert!(!is_safe_destination("javascript:alert(1)"));
    assert!(!is_safe_destination("java\tscript:alert(1)"));
    assert!(!is_safe_destination(" javascript:alert(1)"));
    assert!(!is_safe_destination("file:///etc/passwd"));
}
