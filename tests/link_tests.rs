use ferrocreole::{to_html, to_html_with_config, Config};

#[test]
fn test_link_with_text() {
    assert_eq!(
        to_html("[[http://x.com|X]]"),
        "<p><a href=\"http://x.com\">X</a></p>\n\n"
    );
}

#[test]
fn test_link_without_text_uses_url() {
    assert_eq!(to_html("[[Page]]"), "<p><a href=\"Page\">Page</a></p>\n\n");
}

#[test]
fn test_link_text_markup() {
    let html = to_html("[[a|**b**]]");
    assert!(html.contains("<a href=\"a\"><strong>b</strong></a>"), "Got: {html}");
}

#[test]
fn test_link_hook_rewrites_url() {
    let config = Config::new().with_link_hook(|url| format!("/wiki/{url}"));
    assert_eq!(
        to_html_with_config("[[Home|Start]]", &config),
        "<p><a href=\"/wiki/Home\">Start</a></p>\n\n"
    );
}

#[test]
fn test_custom_links_use_hook_output() {
    let config = Config::new()
        .with_custom_links()
        .with_link_hook(|markup| format!("<link:{markup}>"));
    assert_eq!(
        to_html_with_config("[[a|b]]", &config),
        "<p><link:[[a|b]]></p>\n\n"
    );
}

#[test]
fn test_custom_links_without_hook_keep_markup() {
    let config = Config::new().with_custom_links();
    assert_eq!(to_html_with_config("[[a|b]]", &config), "<p>[[a|b]]</p>\n\n");
}

#[test]
fn test_image_with_alt() {
    assert_eq!(
        to_html("{{pic.png|A pic}}"),
        "<p><img src=\"pic.png\" alt=\"A pic\" /></p>\n\n"
    );
}

#[test]
fn test_image_without_alt() {
    assert_eq!(to_html("{{pic.png}}"), "<p><img src=\"pic.png\" /></p>\n\n");
}

#[test]
fn test_image_hook_rewrites_source() {
    let config = Config::new().with_image_hook(|src| format!("/media/{src}"));
    let html = to_html_with_config("{{pic.png}}", &config);
    assert!(html.contains("src=\"/media/pic.png\""), "Got: {html}");
}

#[test]
fn test_custom_images() {
    let config = Config::new()
        .with_custom_images()
        .with_image_hook(|markup| format!("<figure>{markup}</figure>"));
    assert_eq!(
        to_html_with_config("{{pic.png|A}}", &config),
        "<p><figure>{{pic.png|A}}</figure></p>\n\n"
    );
}

#[test]
fn test_bare_link_hook() {
    let config = Config::new().with_bare_link_hook(|url| url.replace("http:", "https:"));
    assert_eq!(
        to_html_with_config("http://x.com", &config),
        "<p><a href=\"https://x.com\">https://x.com</a></p>\n\n"
    );
}

#[test]
fn test_custom_bare_links() {
    let config = Config::new()
        .with_custom_bare_links()
        .with_bare_link_hook(|url| format!("<{url}>"));
    assert_eq!(
        to_html_with_config("http://x.com", &config),
        "<p><http://x.com></p>\n\n"
    );
}

#[test]
fn test_block_plugin_hook() {
    let config = Config::new().with_plugin_hook(|body| body.to_uppercase());
    assert_eq!(to_html_with_config("<< plugin >>", &config), " PLUGIN ");
}

#[test]
fn test_inline_plugin_without_hook() {
    assert_eq!(to_html("a <<x>> b"), "<p>a <<x>> b</p>\n\n");
}

#[test]
fn test_triple_plugin_takes_priority() {
    let config = Config::new().with_plugin_hook(|body| format!("[{body}]"));
    assert_eq!(
        to_html_with_config("a <<<x>>> b", &config),
        "<p>a [x] b</p>\n\n"
    );
}
