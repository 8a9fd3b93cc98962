use ferrocreole::to_html;

#[test]
fn test_simple_table() {
    assert_eq!(
        to_html("|a|b|\n|c|d|"),
        "<table>\n    <tr>\n        <td>a</td>\n        <td>b</td>\n    </tr>\n    <tr>\n        <td>c</td>\n        <td>d</td>\n    </tr>\n</table>\n\n"
    );
}

#[test]
fn test_header_cells() {
    let html = to_html("|=h1|=h2|\n|a|b|");
    assert!(
        html.starts_with("<table>\n    <tr>\n        <th>h1</th>\n        <th>h2</th>\n    </tr>\n"),
        "Got: {html}"
    );
    assert!(html.contains("<td>a</td>"), "Got: {html}");
}

#[test]
fn test_cells_are_trimmed() {
    let html = to_html("| a | b |");
    assert!(html.contains("<td>a</td>\n        <td>b</td>"), "Got: {html}");
}

#[test]
fn test_link_bar_does_not_split_cell() {
    let html = to_html("|[[a|b]]|c|");
    assert!(html.contains("<td><a href=\"a\">b</a></td>"), "Got: {html}");
    assert!(html.contains("<td>c</td>"), "Got: {html}");
}

#[test]
fn test_table_then_paragraph() {
    assert_eq!(
        to_html("|a|\ntext"),
        "<table>\n    <tr>\n        <td>a</td>\n    </tr>\n</table>\n\n<p>text</p>\n\n"
    );
}

#[test]
fn test_paragraph_then_table() {
    let html = to_html("text\n|a|");
    assert!(html.starts_with("<p>text</p>\n\n<table>\n"), "Got: {html}");
}
