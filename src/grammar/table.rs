//! The Creole grammar table.
//!
//! Row order must follow [`ChunkKind`] declaration order. Order inside
//! `children` lists is significant: more specific kinds come before the
//! `plain` and `any` catch-alls, and `plug` before `plug2`.
//!
//! Patterns are compiled with `(?sm)`: `.` spans newlines and `^`/`$` match
//! at line boundaries.

use super::{ChunkKind as K, Filter, Hint, Rule, Stop};

/// End of line or end of input.
macro_rules! eol {
    () => {
        r"(?:\n|$)"
    };
}

/// Non-plain inline widgets.
const INLINE: &[K] = &[
    K::Strong,
    K::Emphasis,
    K::LineBreak,
    K::Escape,
    K::Image,
    K::Link,
    K::BareLink,
    K::InlineNowiki,
    K::Subscript,
    K::Superscript,
    K::Monospace,
    K::Underline,
    K::TriplePlugin,
    K::DoublePlugin,
    K::Trademark,
    K::Registered,
    K::Copyright,
    K::EnDash,
    K::Ellipsis,
    K::Ampersand,
];

/// Inline widgets plus plain text.
const ALL_INLINE: &[K] = &[
    K::Strong,
    K::Emphasis,
    K::LineBreak,
    K::Escape,
    K::Image,
    K::Link,
    K::BareLink,
    K::InlineNowiki,
    K::Subscript,
    K::Superscript,
    K::Monospace,
    K::Underline,
    K::TriplePlugin,
    K::DoublePlugin,
    K::Trademark,
    K::Registered,
    K::Copyright,
    K::EnDash,
    K::Ellipsis,
    K::Ampersand,
    K::Plain,
    K::Any,
];

const BLOCKS: &[K] = &[
    K::Heading1,
    K::Heading2,
    K::Heading3,
    K::HorizontalRule,
    K::Nowiki,
    K::Heading4,
    K::Heading5,
    K::Heading6,
    K::UnorderedList,
    K::OrderedList,
    K::Table,
    K::Paragraph,
    K::IndentedParagraph,
    K::DefinitionList,
    K::TriplePlugin,
    K::DoublePlugin,
    K::Blank,
];

const LIST_STOPS: &[K] = &[
    K::Blank,
    K::IndentedParagraph,
    K::AnyHeading,
    K::Nowiki,
    K::ListItem,
    K::Table,
    K::HorizontalRule,
    K::DefinitionList,
];

/// Ambiguous `|` inside links, images and nowiki must not end a table cell.
const CELL_STOP: &str = r"[^~](?=\|(?!(?:[^\[]*\]\])|(?:[^\{]*\}\})))";

const fn heading(kind: K, start: &'static str, prefix: &'static str, suffix: &'static str) -> Rule {
    Rule {
        start: Some(start),
        stop: Some(Stop::Pattern(r"\n")),
        hint: Hint::Chars(&['=', ' ']),
        children: ALL_INLINE,
        prefix,
        suffix,
        filter: Some(Filter::Heading),
        ..Rule::new(kind)
    }
}

const fn span(
    kind: K,
    start: &'static str,
    stop: &'static str,
    hint: &'static [char],
    marker: &'static str,
    prefix: &'static str,
    suffix: &'static str,
) -> Rule {
    Rule {
        start: Some(start),
        stop: Some(Stop::Pattern(stop)),
        hint: Hint::Chars(hint),
        children: ALL_INLINE,
        prefix,
        suffix,
        filter: Some(Filter::Delimited(marker)),
        ..Rule::new(kind)
    }
}

const fn entity(
    kind: K,
    start: &'static str,
    stop: &'static str,
    hint: &'static [char],
    entity: &'static str,
) -> Rule {
    Rule {
        start: Some(start),
        stop: Some(Stop::Pattern(stop)),
        hint: Hint::Chars(hint),
        filter: Some(Filter::Entity(entity)),
        ..Rule::new(kind)
    }
}

/// The complete grammar, indexed by [`ChunkKind`].
pub static RULES: [Rule; K::COUNT] = TABLE;

const TABLE: [Rule; K::COUNT] = [
    Rule {
        children: BLOCKS,
        ..Rule::new(K::Top)
    },
    Rule {
        start: Some(concat!("(?= *", eol!(), ")")),
        start_after_break: Some(concat!("(?=(?:^|\\n) *", eol!(), ")")),
        stop: Some(Stop::Pattern(r"(?=\S)")),
        hint: Hint::Chars(&['\n']),
        filter: Some(Filter::Discard),
        ..Rule::new(K::Blank)
    },
    Rule {
        start: Some("(?=.)"),
        stop: Some(Stop::Siblings(&[
            K::Blank,
            K::IndentedParagraph,
            K::AnyHeading,
            K::HorizontalRule,
            K::Nowiki,
            K::UnorderedList,
            K::OrderedList,
            K::DefinitionList,
            K::Table,
        ])),
        hint: Hint::Plain,
        children: ALL_INLINE,
        prefix: "<p>",
        suffix: "</p>\n\n",
        filter: Some(Filter::Chomp),
        ..Rule::new(K::Paragraph)
    },
    Rule {
        start: Some("(?=:)"),
        start_after_break: Some(r"\n(?=:)"),
        stop: Some(Stop::Siblings(&[
            K::Blank,
            K::AnyHeading,
            K::HorizontalRule,
            K::Nowiki,
            K::UnorderedList,
            K::OrderedList,
            K::DefinitionList,
            K::Table,
        ])),
        hint: Hint::Chars(&[':']),
        children: &[K::Paragraph, K::IndentedParagraph],
        prefix: "<div style=\"margin-left: 2em\">",
        suffix: "</div>\n",
        filter: Some(Filter::Indent),
        ..Rule::new(K::IndentedParagraph)
    },
    Rule {
        start: Some("(?=;)"),
        start_after_break: Some(r"\n(?=;)"),
        stop: Some(Stop::Siblings(&[
            K::Blank,
            K::AnyHeading,
            K::HorizontalRule,
            K::Nowiki,
            K::UnorderedList,
            K::OrderedList,
            K::Table,
        ])),
        hint: Hint::Chars(&[';']),
        children: &[K::DefinitionTerm, K::DefinitionBody],
        prefix: "<dl>\n",
        suffix: "</dl>\n",
        ..Rule::new(K::DefinitionList)
    },
    Rule {
        start: Some("(?=;)"),
        start_after_break: Some(r"\n(?=;)"),
        stop: Some(Stop::Pattern(r"(?=:|\n)")),
        hint: Hint::Chars(&[';']),
        children: ALL_INLINE,
        prefix: "  <dt>",
        suffix: "</dt>\n",
        filter: Some(Filter::DefinitionTerm),
        ..Rule::new(K::DefinitionTerm)
    },
    Rule {
        start: Some(r"(?=\n|:)"),
        start_after_break: Some(r"(?:\n|:)"),
        stop: Some(Stop::Pattern(r".(?=:)|\n(?=;)")),
        hint: Hint::Chars(&[':', '\n']),
        children: ALL_INLINE,
        prefix: "    <dd>",
        suffix: "</dd>\n",
        filter: Some(Filter::DefinitionBody),
        ..Rule::new(K::DefinitionBody)
    },
    Rule {
        start: Some(r"(?= *\|.)"),
        start_after_break: Some(r"\n(?= *\|.)"),
        stop: Some(Stop::Pattern(r"\n(?= *[^|])")),
        hint: Hint::Chars(&['|', ' ']),
        children: &[K::TableRow],
        prefix: "<table>\n",
        suffix: "</table>\n\n",
        ..Rule::new(K::Table)
    },
    Rule {
        start: Some(r"(?= *\|)"),
        stop: Some(Stop::Pattern(r"\n")),
        hint: Hint::Chars(&['|', ' ']),
        children: &[K::TableCell, K::TableHeader],
        prefix: "    <tr>\n",
        suffix: "    </tr>\n",
        filter: Some(Filter::TableRow),
        ..Rule::new(K::TableRow)
    },
    Rule {
        start: Some(r"(?=\|[^=])"),
        stop: Some(Stop::Pattern(CELL_STOP)),
        hint: Hint::Chars(&['|']),
        children: ALL_INLINE,
        prefix: "        <td>",
        suffix: "</td>\n",
        filter: Some(Filter::TableCell),
        ..Rule::new(K::TableCell)
    },
    Rule {
        start: Some(r"(?=\|=)"),
        stop: Some(Stop::Pattern(CELL_STOP)),
        hint: Hint::Chars(&['|']),
        children: ALL_INLINE,
        prefix: "        <th>",
        suffix: "</th>\n",
        filter: Some(Filter::TableHeader),
        ..Rule::new(K::TableHeader)
    },
    Rule {
        start: Some(r"(?=(?:`| *)\*[^*])"),
        start_after_break: Some(r"(?=\n(?:`| *)\*[^*])"),
        stop: Some(Stop::Siblings(LIST_STOPS)),
        hint: Hint::Chars(&['*', ' ']),
        children: &[K::UnorderedList, K::OrderedList, K::ListItem],
        prefix: "<ul>\n",
        suffix: "</ul>\n",
        filter: Some(Filter::List),
        ..Rule::new(K::UnorderedList)
    },
    Rule {
        start: Some(r"(?=(?:`| *)#[^#])"),
        start_after_break: Some(r"(?=\n(?:`| *)#[^#])"),
        stop: Some(Stop::Siblings(LIST_STOPS)),
        hint: Hint::Chars(&['#', ' ']),
        children: &[K::UnorderedList, K::OrderedList, K::ListItem],
        prefix: "<ol>\n",
        suffix: "</ol>\n",
        filter: Some(Filter::List),
        ..Rule::new(K::OrderedList)
    },
    Rule {
        start: Some(r"(?=`[^*#])"),
        start_after_break: Some(r"\n(?=`[^*#])"),
        stop: Some(Stop::Pattern(r"\n(?=`)")),
        hint: Hint::Chars(&['`']),
        children: ALL_INLINE,
        prefix: "    <li>",
        suffix: "</li>\n",
        filter: Some(Filter::ListItem),
        ..Rule::new(K::ListItem)
    },
    Rule {
        start: Some(r"(?=\{\{\{ *\n)"),
        start_after_break: Some(r"\n(?=\{\{\{ *\n)"),
        stop: Some(Stop::Pattern(concat!(r"\n\}\}\} *", eol!()))),
        hint: Hint::Chars(&['{']),
        prefix: "<pre>",
        suffix: "</pre>\n\n",
        filter: Some(Filter::Verbatim),
        ..Rule::new(K::Nowiki)
    },
    Rule {
        start: Some(concat!("(?= *-{4,} *", eol!(), ")")),
        start_after_break: Some(concat!("\\n(?= *-{4,} *", eol!(), ")")),
        stop: Some(Stop::Pattern(eol!())),
        hint: Hint::Chars(&['-', ' ']),
        prefix: "<hr />\n\n",
        filter: Some(Filter::Discard),
        ..Rule::new(K::HorizontalRule)
    },
    Rule {
        start: Some(r"(?=(?:^|\n) *=)"),
        ..Rule::new(K::AnyHeading)
    },
    heading(K::Heading1, "(?= *=[^=])", "<h1>", "</h1>\n\n"),
    heading(K::Heading2, "(?= *={2}[^=])", "<h2>", "</h2>\n\n"),
    heading(K::Heading3, "(?= *={3}[^=])", "<h3>", "</h3>\n\n"),
    heading(K::Heading4, "(?= *={4}[^=])", "<h4>", "</h4>\n\n"),
    heading(K::Heading5, "(?= *={5}[^=])", "<h5>", "</h5>\n\n"),
    heading(K::Heading6, "(?= *={6,})", "<h6>", "</h6>\n\n"),
    Rule {
        start: Some(r"(?=[^*/_,\^\\\{\[<|])"),
        stop: Some(Stop::Siblings(INLINE)),
        hint: Hint::Plain,
        ..Rule::new(K::Plain)
    },
    Rule {
        start: Some("(?=.)"),
        stop: Some(Stop::Siblings(INLINE)),
        ..Rule::new(K::Any)
    },
    Rule {
        start: Some(r"(?=\\\\)"),
        stop: Some(Stop::Pattern(r"\\\\")),
        hint: Hint::Chars(&['\\']),
        prefix: "<br />",
        filter: Some(Filter::Discard),
        ..Rule::new(K::LineBreak)
    },
    Rule {
        start: Some(r"(?=~\S)"),
        stop: Some(Stop::Pattern("~.")),
        hint: Hint::Chars(&['~']),
        filter: Some(Filter::Escape),
        ..Rule::new(K::Escape)
    },
    Rule {
        start: Some(r"(?=\{{3}.*?\}*\}{3})"),
        stop: Some(Stop::Pattern(r".*?\}*\}{3}")),
        hint: Hint::Chars(&['{']),
        prefix: "<tt>",
        suffix: "</tt>",
        filter: Some(Filter::Verbatim),
        ..Rule::new(K::InlineNowiki)
    },
    Rule {
        start: Some("(?=<{3}.*?>*>{3})"),
        stop: Some(Stop::Pattern(".*?>*>{3}")),
        hint: Hint::Chars(&['<']),
        filter: Some(Filter::Plugin {
            open: "<<<",
            close: ">>>",
        }),
        ..Rule::new(K::TriplePlugin)
    },
    Rule {
        start: Some("(?=<{2}.*?>*>{2})"),
        stop: Some(Stop::Pattern(".*?>*>{2}")),
        hint: Hint::Chars(&['<']),
        filter: Some(Filter::Plugin {
            open: "<<",
            close: ">>",
        }),
        ..Rule::new(K::DoublePlugin)
    },
    Rule {
        start: Some("(?=(?:https?|ftp)://)"),
        // ASCII punctuation minus `/` and `?`, so trailing slashes and
        // cache-busting question marks stay part of the URL.
        stop: Some(Stop::Pattern(r##"(?=[!"#$%&'()*+,\-.:;<=>@\[\]^_`{|}~]?(?:\s|$))"##)),
        hint: Hint::Chars(&['h', 'f']),
        prefix: "<a ",
        suffix: "</a>",
        filter: Some(Filter::BareLink),
        ..Rule::new(K::BareLink)
    },
    Rule {
        start: Some(r"(?=\[\[[^\n]+?\]\])"),
        stop: Some(Stop::Pattern(r"\]\]")),
        hint: Hint::Chars(&['[']),
        children: &[K::LinkHref, K::LinkText],
        prefix: "<a ",
        suffix: "</a>",
        filter: Some(Filter::Link),
        ..Rule::new(K::Link)
    },
    Rule {
        start: Some(r"(?=[^|])"),
        stop: Some(Stop::Pattern(r"(?=\|)")),
        prefix: "href=\"",
        suffix: "\">",
        filter: Some(Filter::LinkHref),
        ..Rule::new(K::LinkHref)
    },
    Rule {
        start: Some(r"(?=\|)"),
        stop: Some(Stop::Pattern(r"\n")),
        hint: Hint::Chars(&['|']),
        children: ALL_INLINE,
        filter: Some(Filter::LinkText),
        ..Rule::new(K::LinkText)
    },
    Rule {
        start: Some(r"(?=\{\{[^\{][^\n]*?\}\})"),
        stop: Some(Stop::Pattern(r"\}\}")),
        hint: Hint::Chars(&['{']),
        children: &[K::ImageSrc, K::ImageAlt],
        prefix: "<img ",
        suffix: " />",
        filter: Some(Filter::Image),
        ..Rule::new(K::Image)
    },
    Rule {
        start: Some(r"(?=\|)"),
        stop: Some(Stop::Pattern(r"\n")),
        hint: Hint::Chars(&['|']),
        prefix: " alt=\"",
        suffix: "\"",
        filter: Some(Filter::ImageAlt),
        ..Rule::new(K::ImageAlt)
    },
    Rule {
        start: Some(r"(?=[^|])"),
        stop: Some(Stop::Pattern(r"(?=\|)")),
        prefix: "src=\"",
        suffix: "\"",
        filter: Some(Filter::ImageSrc),
        ..Rule::new(K::ImageSrc)
    },
    span(K::Strong, r"(?=\*\*)", r"\*\*.*?\*\*", &['*'], "**", "<strong>", "</strong>"),
    // `[^:]` stands in for a `(?<!:)` lookbehind: the `//` of `http://` never
    // closes the span, and neither does any `//` right after a colon.
    span(K::Emphasis, "(?=//)", "//.*?[^:]//", &['/'], "//", "<em>", "</em>"),
    span(K::Monospace, "(?=##)", "##.*?##", &['#'], "##", "<tt>", "</tt>"),
    span(K::Subscript, "(?=,,)", ",,.*?,,", &[','], ",,", "<sub>", "</sub>"),
    span(K::Superscript, r"(?=\^\^)", r"\^\^.*?\^\^", &['^'], "^^", "<sup>", "</sup>"),
    span(K::Underline, "(?=__)", "__.*?__", &['_'], "__", "<u>", "</u>"),
    entity(K::Ampersand, r"(?=&(?!\w+;))", ".", &['&'], "&amp;"),
    entity(K::Trademark, r"(?=\(TM\))", r"\(TM\)", &['('], "&trade;"),
    entity(K::Registered, r"(?=\(R\))", r"\(R\)", &['('], "&reg;"),
    entity(K::Copyright, r"(?=\(C\))", r"\(C\)", &['('], "&copy;"),
    entity(K::EnDash, "(?=--)", "--", &['-'], "&ndash;"),
    entity(K::Ellipsis, r"(?=\.\.\.)", r"\.\.\.", &['.'], "&hellip;"),
];

const _: () = {
    let mut i = 0;
    while i < TABLE.len() {
        assert!(TABLE[i].kind as usize == i);
        i += 1;
    }
};
