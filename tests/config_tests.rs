use ferrocreole::{to_html, to_html_with_config, ChunkKind, Config, TemplateSlot};

#[test]
fn test_paragraph_template_override() {
    let config = Config::new().override_template("p", TemplateSlot::Prefix, "<p class=special>");
    assert_eq!(
        to_html_with_config("Hi", &config),
        "<p class=special>Hi</p>\n\n"
    );
}

#[test]
fn test_unknown_template_name_is_ignored() {
    let config = Config::new().override_template("blink", TemplateSlot::Prefix, "<blink>");
    assert_eq!(to_html_with_config("Hi", &config), to_html("Hi"));
}

#[test]
fn test_typed_template_override() {
    let config = Config::new()
        .with_template(ChunkKind::Strong, TemplateSlot::Prefix, "<b>")
        .with_template(ChunkKind::Strong, TemplateSlot::Suffix, "</b>");
    assert_eq!(to_html_with_config("**x**", &config), "<p><b>x</b></p>\n\n");
}

#[test]
fn test_later_override_wins() {
    let config = Config::new()
        .override_template("em", TemplateSlot::Prefix, "<i>")
        .override_template("em", TemplateSlot::Suffix, "</i>")
        .override_template("em", TemplateSlot::Prefix, "<cite>");
    assert_eq!(
        to_html_with_config("//x//", &config),
        "<p><cite>x</i></p>\n\n"
    );
}

#[test]
fn test_describe_templates() {
    let description = Config::new().describe_templates();
    assert!(description.contains("u: open(<u>) close(</u>)\n"), "Got: {description}");
    assert!(description.contains("p: open(<p>) close(</p>\\n\\n)\n"), "Got: {description}");
    assert!(!description.contains("href:"), "Got: {description}");
}

#[test]
fn test_list_templates_sorted_by_name() {
    let config = Config::new();
    let names: Vec<&str> = config
        .list_templates()
        .iter()
        .map(|entry| entry.kind.name())
        .collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
    assert!(names.contains(&"strong"));
    assert!(!names.contains(&"plain"));
}

#[test]
fn test_listing_reflects_overrides() {
    let config = Config::new().override_template("hr", TemplateSlot::Prefix, "<hr class=rule />");
    let entry = config
        .list_templates()
        .into_iter()
        .find(|entry| entry.kind == ChunkKind::HorizontalRule)
        .expect("hr is listed");
    assert_eq!(entry.prefix, "<hr class=rule />");
}

#[test]
fn test_config_shared_across_threads() {
    let config = Config::new().with_link_hook(|url| format!("/{url}"));
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| to_html_with_config("[[a|b]]", &config)))
            .collect();
        for handle in handles {
            assert_eq!(
                handle.join().expect("render thread"),
                "<p><a href=\"/a\">b</a></p>\n\n"
            );
        }
    });
}
