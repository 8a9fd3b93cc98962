//! Chunk filters.
//!
//! Every filter is a pure function of the raw chunk text and the active
//! [`Config`]. Substitutions replace only the first match unless noted,
//! and `^`/`$` match at line boundaries.

use crate::config::{Config, Hook};
use crate::escape::{escape_verbatim, needs_escape};
use crate::grammar::{ChunkKind, Filter};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

macro_rules! pattern {
    ($($name:ident = $re:expr;)+) => {
        $(
            static $name: LazyLock<Regex> =
                LazyLock::new(|| Regex::new($re).expect("built-in filter pattern"));
        )+
    };
}

pattern! {
    LEADING_SPACE = r"(?m)^\s*";
    TRAILING_SPACE = r"(?m)\s*$";
    TERM_MARKER = r"(?m)^;\s*";
    BODY_MARKER = r"(?:\n|:)\s*";
    ROW_INDENT = r"(?m)^ *";
    ROW_CLOSE = r"(?m)\| *$";
    CELL_MARKER = r"(?m)^ *\| *";
    HEADER_MARKER = r"(?m)^ *\|= *";
    HEADING_OPEN = r"(?m)^\s*=*\s*";
    HEADING_CLOSE = r"(?m)\s*=*\s*$";
    LIST_MARKER = r"(?:`*| *)[*#]";
    NESTED_LIST_MARKER = r"\n(?:`*| *)[*#]";
    ITEM_MARKER = r"` *";
    VERBATIM_CLOSE = r"(?m)\}{3}\s*$";
    ALT_MARKER = r"(?m)^\|\s*";
}

impl Filter {
    /// Transform the raw text of a chunk.
    pub fn apply<'a>(self, raw: &'a str, config: &Config) -> Cow<'a, str> {
        let text = Cow::Borrowed(raw);
        match self {
            Filter::Discard => Cow::Borrowed(""),
            Filter::Chomp => Cow::Borrowed(chomp(raw)),
            Filter::Indent => Cow::Owned(raw.replacen(':', "", 1).replacen("\n:", "\n", 1)),
            Filter::DefinitionTerm => replace_first(text, &TERM_MARKER, ""),
            Filter::DefinitionBody => {
                replace_first(replace_first(text, &BODY_MARKER, ""), &TRAILING_SPACE, "")
            }
            Filter::TableRow => replace_first(replace_first(text, &ROW_INDENT, ""), &ROW_CLOSE, ""),
            Filter::TableCell => {
                replace_first(replace_first(text, &CELL_MARKER, ""), &TRAILING_SPACE, "")
            }
            Filter::TableHeader => {
                replace_first(replace_first(text, &HEADER_MARKER, ""), &TRAILING_SPACE, "")
            }
            Filter::List => strip_list_markers(raw),
            Filter::ListItem => chomp_owned(replace_first(text, &ITEM_MARKER, "")),
            Filter::Verbatim => {
                let body = replace_first(Cow::Borrowed(drop_chars(raw, 3)), &VERBATIM_CLOSE, "");
                if needs_escape(&body) {
                    Cow::Owned(escape_verbatim(&body).into_owned())
                } else {
                    body
                }
            }
            Filter::Heading => strip_heading(raw),
            Filter::Escape => Cow::Borrowed(drop_chars(raw, 1)),
            Filter::Plugin { open, close } => {
                let body = strip_closing(Cow::Borrowed(drop_chars(raw, open.len())), close);
                match config.plugin_hook() {
                    Some(hook) => Cow::Owned(hook(&body)),
                    None => Cow::Owned(format!("{open}{body}{close}")),
                }
            }
            Filter::BareLink => {
                if config.custom_bare_links() {
                    return apply_hook(text, config.bare_link_hook());
                }
                let url = apply_hook(trim_lines(text), config.bare_link_hook());
                Cow::Owned(format!("href=\"{url}\">{url}"))
            }
            Filter::Link => {
                if config.custom_links() {
                    return apply_hook(text, config.link_hook());
                }
                let inner = drop_last_chars(drop_chars(raw, 2), 2);
                if inner.contains('|') {
                    Cow::Borrowed(inner)
                } else {
                    Cow::Owned(format!("{inner}|{inner}"))
                }
            }
            Filter::LinkHref => apply_hook(trim_lines(text), config.link_hook()),
            Filter::LinkText | Filter::ImageAlt => {
                replace_first(replace_first(text, &ALT_MARKER, ""), &TRAILING_SPACE, "")
            }
            Filter::Image => {
                if config.custom_images() {
                    return apply_hook(text, config.image_hook());
                }
                strip_closing(Cow::Borrowed(drop_chars(raw, 2)), "}}")
            }
            Filter::ImageSrc => {
                let src = replace_first(replace_first(text, &ALT_MARKER, ""), &TRAILING_SPACE, "");
                apply_hook(src, config.image_hook())
            }
            Filter::Delimited(marker) => {
                strip_closing(Cow::Borrowed(drop_chars(raw, marker.len())), marker)
            }
            Filter::Entity(entity) => Cow::Borrowed(entity),
        }
    }
}

/// Apply the filter `kind` has under `config`; kinds without one pass
/// `raw` through unchanged.
///
/// ```
/// use ferrocreole::{filter_chunk, ChunkKind, Config};
///
/// let config = Config::new();
/// assert_eq!(filter_chunk(ChunkKind::Heading5, "head == ", &config), "head");
/// assert_eq!(filter_chunk(ChunkKind::Blank, "\n\n", &config), "");
/// ```
pub fn filter_chunk(kind: ChunkKind, raw: &str, config: &Config) -> String {
    match kind.rule().filter {
        Some(filter) => filter.apply(raw, config).into_owned(),
        None => raw.to_owned(),
    }
}

/// Strip the `=` run and surrounding whitespace from both ends of a heading.
pub fn strip_heading(text: &str) -> Cow<'_, str> {
    replace_first(
        replace_first(Cow::Borrowed(text), &HEADING_OPEN, ""),
        &HEADING_CLOSE,
        "",
    )
}

/// Turn the first list marker, and every marker that opens a line, into a
/// single backtick.
///
/// Markers already converted by an enclosing list are backticks themselves,
/// so nesting depth is the number of leading backticks plus one.
pub fn strip_list_markers(text: &str) -> Cow<'_, str> {
    let first = replace_first(Cow::Borrowed(text), &LIST_MARKER, "`");
    if NESTED_LIST_MARKER.is_match(&first) {
        Cow::Owned(NESTED_LIST_MARKER.replace_all(&first, "\n`").into_owned())
    } else {
        first
    }
}

/// Remove one trailing `\r\n`, `\n` or `\r`.
pub fn chomp(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .or_else(|| text.strip_suffix('\r'))
        .unwrap_or(text)
}

fn chomp_owned(text: Cow<'_, str>) -> Cow<'_, str> {
    match text {
        Cow::Borrowed(s) => Cow::Borrowed(chomp(s)),
        Cow::Owned(mut s) => {
            let len = chomp(&s).len();
            s.truncate(len);
            Cow::Owned(s)
        }
    }
}

fn trim_lines(text: Cow<'_, str>) -> Cow<'_, str> {
    replace_first(replace_first(text, &LEADING_SPACE, ""), &TRAILING_SPACE, "")
}

fn apply_hook<'a>(text: Cow<'a, str>, hook: Option<&Hook>) -> Cow<'a, str> {
    match hook {
        Some(hook) => Cow::Owned(hook(&text)),
        None => text,
    }
}

/// Replace the leftmost match of `re`, copying only when something changes.
fn replace_first<'a>(text: Cow<'a, str>, re: &Regex, replacement: &str) -> Cow<'a, str> {
    let Some(found) = re.find(&text) else {
        return text;
    };
    let range = found.range();
    if range.is_empty() && replacement.is_empty() {
        return text;
    }
    let mut out = text.into_owned();
    out.replace_range(range, replacement);
    Cow::Owned(out)
}

/// Remove the first `marker` that ends a line.
fn strip_closing<'a>(text: Cow<'a, str>, marker: &str) -> Cow<'a, str> {
    let Some(at) = closing_marker(&text, marker) else {
        return text;
    };
    let mut out = text.into_owned();
    out.replace_range(at..at + marker.len(), "");
    Cow::Owned(out)
}

/// Every occurrence is considered, overlapping ones included, so `***` at
/// the end of a line closes `**` at its second `*`.
fn closing_marker(text: &str, marker: &str) -> Option<usize> {
    let step = marker.chars().next()?.len_utf8();
    let mut from = 0;
    while let Some(found) = text[from..].find(marker) {
        let at = from + found;
        let end = at + marker.len();
        if end == text.len() || text.as_bytes()[end] == b'\n' {
            return Some(at);
        }
        from = at + step;
    }
    None
}

fn drop_chars(text: &str, n: usize) -> &str {
    text.char_indices().nth(n).map_or("", |(i, _)| &text[i..])
}

fn drop_last_chars(text: &str, n: usize) -> &str {
    match n.checked_sub(1) {
        None => text,
        Some(skip) => text.char_indices().rev().nth(skip).map_or("", |(i, _)| &text[..i]),
    }
}
