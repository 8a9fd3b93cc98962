//! Declarative chunk grammar.
//!
//! The grammar is a table of [`Rule`]s, one per [`ChunkKind`], describing:
//! - where a chunk of that kind may start (an anchored, zero-width pattern)
//! - where its content ends (a pattern, or the start of any listed sibling)
//! - which characters hint that the kind is worth testing first
//! - which kinds it may contain, its filter, and its open/close templates
//!
//! The table itself lives in [`table`]; [`compile`] derives the matching
//! state (anchored start matchers, delimiter matchers and hint indices) once.

mod compile;
mod table;

pub use compile::{grammar, Grammar, GrammarError};
pub use table::RULES;

use std::fmt;
use std::str::FromStr;

/// Characters that may indicate inline wiki markup.
///
/// Every other printable ASCII character is a "plain" character.
pub const SPECIAL_CHARS: &[char] = &[
    '^', '\\', '*', '/', '_', ',', '{', '[', '<', '~', '|', '\n', '#', ':', ';', '(', '-', '.',
];

/// Printable ASCII characters that never start inline markup.
pub fn plain_chars() -> impl Iterator<Item = char> {
    (32u8..=126)
        .map(char::from)
        .filter(|c| !SPECIAL_CHARS.contains(c))
}

macro_rules! chunk_kinds {
    ($($(#[$doc:meta])* $variant:ident => $name:literal,)+) => {
        /// Every chunk type known to the grammar.
        ///
        /// The discriminant doubles as the index into [`RULES`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum ChunkKind {
            $($(#[$doc])* $variant,)+
        }

        impl ChunkKind {
            /// All kinds in table order.
            pub const ALL: &'static [ChunkKind] = &[$(ChunkKind::$variant,)+];

            /// Number of chunk kinds.
            pub const COUNT: usize = Self::ALL.len();

            /// Tag name used for template overrides and listings.
            pub const fn name(self) -> &'static str {
                match self {
                    $(ChunkKind::$variant => $name,)+
                }
            }
        }

        impl FromStr for ChunkKind {
            type Err = UnknownChunkKind;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(ChunkKind::$variant),)+
                    _ => Err(UnknownChunkKind(s.to_owned())),
                }
            }
        }
    };
}

chunk_kinds! {
    /// Root container: the sequence of top-level blocks.
    Top => "top",
    /// Blank lines between blocks, discarded.
    Blank => "blank",
    Paragraph => "p",
    /// `:` indented paragraph.
    IndentedParagraph => "ip",
    DefinitionList => "dl",
    DefinitionTerm => "dt",
    DefinitionBody => "dd",
    Table => "table",
    TableRow => "tr",
    TableCell => "td",
    TableHeader => "th",
    UnorderedList => "ul",
    OrderedList => "ol",
    ListItem => "li",
    /// `{{{` preformatted block `}}}`.
    Nowiki => "nowiki",
    HorizontalRule => "hr",
    /// Any heading level; only used as a stop condition.
    AnyHeading => "h",
    Heading1 => "h1",
    Heading2 => "h2",
    Heading3 => "h3",
    Heading4 => "h4",
    Heading5 => "h5",
    Heading6 => "h6",
    /// Run of text free of inline markup.
    Plain => "plain",
    /// Catch-all for a character no other inline kind claims.
    Any => "any",
    LineBreak => "br",
    /// `~` escaped character.
    Escape => "esc",
    /// Inline `{{{nowiki}}}`.
    InlineNowiki => "inowiki",
    /// `<<<plugin>>>`
    TriplePlugin => "plug",
    /// `<<plugin>>`
    DoublePlugin => "plug2",
    /// Bare `http://` style link.
    BareLink => "ilink",
    /// `[[url|text]]` link.
    Link => "link",
    LinkHref => "href",
    LinkText => "atext",
    /// `{{src|alt}}` image.
    Image => "img",
    ImageAlt => "imgalt",
    ImageSrc => "imgsrc",
    Strong => "strong",
    Emphasis => "em",
    Monospace => "mono",
    Subscript => "sub",
    Superscript => "sup",
    Underline => "u",
    Ampersand => "amp",
    Trademark => "tm",
    Registered => "reg",
    Copyright => "copy",
    EnDash => "ndash",
    Ellipsis => "ellipsis",
}

impl ChunkKind {
    /// The table rule for this kind.
    #[inline]
    pub fn rule(self) -> &'static Rule {
        &RULES[self as usize]
    }

    /// Whether this kind recurses into children.
    #[inline]
    pub fn is_container(self) -> bool {
        !self.rule().children.is_empty()
    }
}

impl fmt::Display for ChunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A tag name that does not belong to any chunk kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown chunk kind `{0}`")]
pub struct UnknownChunkKind(pub String);

/// Where a chunk's content ends.
#[derive(Debug, Clone, Copy)]
pub enum Stop {
    /// The next match of this pattern, searched forward.
    Pattern(&'static str),
    /// Wherever any of these kinds could begin, using their after-break
    /// pattern when they have one.
    Siblings(&'static [ChunkKind]),
}

/// Lookahead characters that suggest a kind is worth testing first.
#[derive(Debug, Clone, Copy)]
pub enum Hint {
    None,
    Chars(&'static [char]),
    /// Every plain character (see [`plain_chars`]).
    Plain,
}

/// Pure transform applied to a chunk's raw text before it is emitted or
/// recursed into. Implemented in [`crate::filter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Replace the chunk with nothing.
    Discard,
    /// Drop one trailing line ending.
    Chomp,
    /// Strip the `:` marker of an indented paragraph.
    Indent,
    DefinitionTerm,
    DefinitionBody,
    TableRow,
    TableCell,
    TableHeader,
    /// Normalize list markers to backtick sentinels.
    List,
    ListItem,
    /// Strip `{{{ }}}` and escape `&`, `<`, `>`.
    Verbatim,
    Heading,
    /// Drop the `~` of an escape.
    Escape,
    /// Plugin markup; unconsumed plugins are re-wrapped in `open`/`close`.
    Plugin { open: &'static str, close: &'static str },
    BareLink,
    Link,
    LinkHref,
    LinkText,
    Image,
    ImageSrc,
    ImageAlt,
    /// Strip a two character marker such as `**` from both ends.
    Delimited(&'static str),
    /// Replace the chunk with a fixed entity.
    Entity(&'static str),
}

/// One row of the grammar table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub kind: ChunkKind,
    /// Zero-width pattern tested at the scan position.
    pub start: Option<&'static str>,
    /// Alternate start pattern used when this kind acts as a sibling stop.
    pub start_after_break: Option<&'static str>,
    pub stop: Option<Stop>,
    pub hint: Hint,
    /// Kinds this chunk may contain, in priority order. Empty for leaves.
    pub children: &'static [ChunkKind],
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub filter: Option<Filter>,
}

impl Rule {
    /// A leaf rule with no patterns, templates or filter.
    pub const fn new(kind: ChunkKind) -> Self {
        Self {
            kind,
            start: None,
            start_after_break: None,
            stop: None,
            hint: Hint::None,
            children: &[],
            prefix: "",
            suffix: "",
            filter: None,
        }
    }
}
