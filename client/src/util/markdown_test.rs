use super::*;

#[test]
fn renders_basic_markdown() {
    let html = render_markdown_html("**Ada** badged in *twice*");
    assert!(html.contains("<strong>Ada</strong>"));
    assert!(html.contains("<em>twice</em>"));
}

#[test]
fn strips_raw_html() {
    let html = render_markdown_html("hello <script>alert(1)</script>\n\n<div>block</div>");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<div>"));
    assert!(html.contains("hello"));
}

#[test]
fn renders_tables() {
    let html = render_markdown_html("| Gate | Count |\n|---|---|\n| Lobby | 3 |");
    assert!(html.contains("<table>"));
}
