use ferrocreole::to_html;

#[test]
fn test_strong() {
    assert_eq!(to_html("**Hello**"), "<p><strong>Hello</strong></p>\n\n");
}

#[test]
fn test_emphasis() {
    assert_eq!(to_html("//Hello//"), "<p><em>Hello</em></p>\n\n");
}

#[test]
fn test_nested_spans() {
    assert_eq!(
        to_html("**bold //both//**"),
        "<p><strong>bold <em>both</em></strong></p>\n\n"
    );
}

#[test]
fn test_other_spans() {
    assert_eq!(to_html("##code##"), "<p><tt>code</tt></p>\n\n");
    assert_eq!(to_html("^^up^^"), "<p><sup>up</sup></p>\n\n");
    assert_eq!(to_html(",,down,,"), "<p><sub>down</sub></p>\n\n");
    assert_eq!(to_html("__under__"), "<p><u>under</u></p>\n\n");
}

#[test]
fn test_unclosed_span_runs_to_end() {
    assert_eq!(to_html("**open"), "<p><strong>open</strong></p>\n\n");
}

#[test]
fn test_line_break() {
    assert_eq!(to_html("a\\\\b"), "<p>a<br />b</p>\n\n");
}

#[test]
fn test_escaped_markup() {
    assert_eq!(to_html("~**not bold~**"), "<p>**not bold**</p>\n\n");
}

#[test]
fn test_inline_nowiki() {
    assert_eq!(to_html("{{{**x**}}}"), "<p><tt>**x**</tt></p>\n\n");
    assert_eq!(to_html("{{{<b>}}}"), "<p><tt>&lt;b&gt;</tt></p>\n\n");
}

#[test]
fn test_entities() {
    assert_eq!(
        to_html("a -- b (C) ..."),
        "<p>a &ndash; b &copy; &hellip;</p>\n\n"
    );
    assert_eq!(to_html("(TM) (R)"), "<p>&trade; &reg;</p>\n\n");
}

#[test]
fn test_ampersand() {
    assert_eq!(to_html("Fish & Chips"), "<p>Fish &amp; Chips</p>\n\n");
    assert_eq!(to_html("&amp; stays"), "<p>&amp; stays</p>\n\n");
}

#[test]
fn test_bare_link() {
    assert_eq!(
        to_html("http://www.yahoo.com/page.html"),
        "<p><a href=\"http://www.yahoo.com/page.html\">http://www.yahoo.com/page.html</a></p>\n\n"
    );
}

#[test]
fn test_bare_link_keeps_trailing_slash() {
    assert_eq!(
        to_html("see http://x.com/."),
        "<p>see <a href=\"http://x.com/\">http://x.com/</a>.</p>\n\n"
    );
}

#[test]
fn test_escaped_bare_link() {
    assert_eq!(to_html("http:~//www.x.com"), "<p>http://www.x.com</p>\n\n");
}

#[test]
fn test_url_does_not_close_emphasis() {
    assert_eq!(
        to_html("//see http://x.com//"),
        "<p><em>see <a href=\"http://x.com\">http://x.com</a></em></p>\n\n"
    );
}

#[test]
fn test_markup_after_long_plain_run() {
    let run = "a".repeat(100_000);
    assert_eq!(
        to_html(&format!("{run} **b**")),
        format!("<p>{run} <strong>b</strong></p>\n\n")
    );
}
