//! ferrocreole: Wiki Creole to XHTML converter
//!
//! One recursive parser walks the input against a declarative grammar table
//! of chunk kinds (headings, paragraphs, lists, tables, inline spans, links,
//! plugins, escapes and entities) and renders each chunk through its
//! open/close templates.
//!
//! # Design Principles
//! - Grammar as data: every chunk kind is a row in [`grammar::RULES`]
//! - Compiled once: matchers and hint indices are derived on first use and
//!   shared read-only
//! - Never fails on markup: anything unrecognised renders as plain text
//! - Explicit configuration: hooks and template overrides live in a
//!   [`Config`] value passed to each render
//!
//! # Example
//! ```
//! let html = ferrocreole::to_html("= Title\n\nSome **bold** text.");
//! assert_eq!(html, "<h1>Title</h1>\n\n<p>Some <strong>bold</strong> text.</p>\n\n");
//! ```

pub mod config;
pub mod escape;
pub mod filter;
pub mod grammar;
pub mod limits;
pub mod parser;
pub mod render;

// Re-export primary types
pub use config::{Config, Hook, TemplateEntry, TemplateSlot};
pub use filter::{chomp, filter_chunk, strip_heading, strip_list_markers};
pub use grammar::{grammar, ChunkKind, Filter, Grammar, GrammarError, Rule, UnknownChunkKind};
pub use parser::Parser;
pub use render::HtmlWriter;

/// Convert Creole markup to XHTML.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// assert_eq!(ferrocreole::to_html("**Hello**"), "<p><strong>Hello</strong></p>\n\n");
/// assert_eq!(ferrocreole::to_html(""), "");
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_config(input, &Config::default())
}

/// Convert Creole markup to XHTML with hooks and template overrides.
///
/// # Example
/// ```
/// use ferrocreole::{to_html_with_config, Config};
///
/// let config = Config::new().with_link_hook(|url| format!("/wiki/{url}"));
/// let html = to_html_with_config("[[Home|home page]]", &config);
/// assert_eq!(html, "<p><a href=\"/wiki/Home\">home page</a></p>\n\n");
/// ```
pub fn to_html_with_config(input: &str, config: &Config) -> String {
    if input.is_empty() {
        return String::new();
    }
    Parser::new(config).render(input)
}

/// Convert Creole markup to XHTML, writing into a provided buffer.
///
/// The buffer is cleared first; its capacity is reused.
pub fn to_html_into(input: &str, out: &mut String) {
    to_html_into_with_config(input, out, &Config::default());
}

/// Convert Creole markup to XHTML into a provided buffer with a configuration.
pub fn to_html_into_with_config(input: &str, out: &mut String, config: &Config) {
    out.clear();
    if input.is_empty() {
        return;
    }
    out.reserve(input.len() + input.len() / 2);
    let mut writer = HtmlWriter::from_string(std::mem::take(out));
    Parser::new(config).render_into(input, ChunkKind::Top, &mut writer);
    *out = writer.into_string();
}
