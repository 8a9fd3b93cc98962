//! One-time derivation of matching state from the rule table.
//!
//! For every rule this builds:
//! - an anchored start matcher (does the kind begin exactly here?)
//! - a delimiter matcher, searched forward for the end of the chunk
//! - for containers, an index from lookahead character to candidate children

use super::{plain_chars, ChunkKind, Hint, Rule, Stop, RULES};
use crate::limits::REGEX_BACKTRACK_LIMIT;
use fancy_regex::{Regex, RegexBuilder};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::sync::LazyLock;

/// Flags every grammar pattern is compiled with.
const FLAGS: &str = "(?sm)";

/// Candidate children for one lookahead character, in declaration order.
type Candidates = SmallVec<[ChunkKind; 4]>;

static GRAMMAR: LazyLock<Grammar> = LazyLock::new(|| match Grammar::compile(&RULES) {
    Ok(grammar) => grammar,
    Err(err) => panic!("built-in Creole grammar failed to compile: {err}"),
});

/// The compiled built-in grammar.
///
/// Compiled on first use and shared read-only afterwards.
#[inline]
pub fn grammar() -> &'static Grammar {
    &GRAMMAR
}

/// A rule whose pattern would not compile.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("invalid start pattern for `{kind}`")]
    Start {
        kind: ChunkKind,
        #[source]
        source: Box<fancy_regex::Error>,
    },
    #[error("invalid delimiter pattern for `{kind}`")]
    Delimiter {
        kind: ChunkKind,
        #[source]
        source: Box<fancy_regex::Error>,
    },
}

struct CompiledRule {
    start: Option<Regex>,
    delimiter: Option<Regex>,
    hints: FxHashMap<char, Candidates>,
}

/// Derived matching state for a rule table.
///
/// Immutable once built, so one instance can serve any number of
/// concurrent renders.
pub struct Grammar {
    rules: &'static [Rule],
    compiled: Vec<CompiledRule>,
}

impl std::fmt::Debug for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grammar")
            .field("rules", &self.rules.len())
            .finish_non_exhaustive()
    }
}

impl Grammar {
    /// Compile a rule table indexed by [`ChunkKind`].
    ///
    /// Rules are looked up by kind; a child or sibling kind without a row
    /// in `rules` is skipped.
    pub fn compile(rules: &'static [Rule]) -> Result<Self, GrammarError> {
        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            compiled.push(CompiledRule {
                start: rule.start.map(|p| anchored(rule.kind, p)).transpose()?,
                delimiter: delimiter_pattern(rules, rule)
                    .map(|p| delimiter(rule.kind, &p))
                    .transpose()?,
                hints: hint_index(rules, rule),
            });
        }

        log::debug!(
            "compiled {} grammar rules ({} containers)",
            compiled.len(),
            rules.iter().filter(|r| !r.children.is_empty()).count()
        );

        Ok(Self { rules, compiled })
    }

    /// The table rule for `kind`, if this grammar has one.
    #[inline]
    pub fn rule(&self, kind: ChunkKind) -> Option<&'static Rule> {
        self.rules.get(kind as usize).filter(|r| r.kind == kind)
    }

    #[inline]
    fn compiled(&self, kind: ChunkKind) -> Option<&CompiledRule> {
        self.rule(kind).and(self.compiled.get(kind as usize))
    }

    /// Candidate children of `container` hinted at by `ch`.
    pub fn hinted(&self, container: ChunkKind, ch: char) -> &[ChunkKind] {
        self.compiled(container)
            .and_then(|c| c.hints.get(&ch))
            .map(SmallVec::as_slice)
            .unwrap_or_default()
    }

    /// Does a chunk of `kind` start exactly at `pos`?
    pub fn starts_at(&self, kind: ChunkKind, text: &str, pos: usize) -> bool {
        let Some(start) = self.compiled(kind).and_then(|c| c.start.as_ref()) else {
            return false;
        };
        match start.is_match(&text[pos..]) {
            Ok(matched) => matched,
            Err(err) => {
                log::warn!("start pattern for `{kind}` failed at {pos}: {err}");
                false
            }
        }
    }

    /// Identify the child of `container` that starts at `pos`.
    ///
    /// Hinted candidates are tried first, then every child in declaration
    /// order, since hints are a heuristic and some kinds (like `any`) have
    /// none.
    pub fn identify(&self, text: &str, container: ChunkKind, pos: usize) -> Option<ChunkKind> {
        let rule = self.rule(container)?;
        if let Some(ch) = text[pos..].chars().next() {
            let hinted = self
                .hinted(container, ch)
                .iter()
                .copied()
                .find(|&kind| self.starts_at(kind, text, pos));
            if hinted.is_some() {
                return hinted;
            }
        }
        rule.children
            .iter()
            .copied()
            .find(|&kind| self.starts_at(kind, text, pos))
    }

    /// End offset of the chunk of `kind` that starts at `pos`.
    ///
    /// This is the end of the next delimiter match, or the end of `text`
    /// when there is none.
    ///
    /// A delimiter that matches an empty span right at `pos` would leave the
    /// scan where it started, so the search is retried from the next
    /// character: anything, then the delimiter. If that finds nothing the
    /// chunk runs to the end of `text`.
    pub fn chunk_end(&self, kind: ChunkKind, text: &str, pos: usize) -> usize {
        let Some(delimiter) = self.compiled(kind).and_then(|c| c.delimiter.as_ref()) else {
            return text.len();
        };
        match find_end(kind, delimiter, text, pos) {
            Some(end) if end > pos => end,
            Some(_) => {
                log::trace!("`{kind}` delimiter made no progress at {pos}, widening");
                let next = text[pos..]
                    .chars()
                    .next()
                    .map_or(text.len(), |ch| pos + ch.len_utf8());
                find_end(kind, delimiter, text, next)
                    .filter(|&end| end > pos)
                    .unwrap_or(text.len())
            }
            None => text.len(),
        }
    }
}

fn find_end(kind: ChunkKind, delimiter: &Regex, text: &str, from: usize) -> Option<usize> {
    if from > text.len() {
        return None;
    }
    match delimiter.find_from_pos(text, from) {
        Ok(found) => found.map(|m| m.end()),
        Err(err) => {
            log::warn!("delimiter for `{kind}` failed at {from}: {err}");
            None
        }
    }
}

fn anchored(kind: ChunkKind, pattern: &str) -> Result<Regex, GrammarError> {
    let body = lookahead_body(pattern).unwrap_or(pattern);
    build(&format!(r"{FLAGS}\A(?:{body})")).map_err(|err| GrammarError::Start {
        kind,
        source: Box::new(err),
    })
}

/// Compile a grammar pattern.
///
/// Delimiter searches over a long run of text accumulate backtracking
/// steps across every start position, so the engine's default budget is
/// lifted.
fn build(pattern: &str) -> Result<Regex, fancy_regex::Error> {
    RegexBuilder::new(pattern)
        .backtrack_limit(REGEX_BACKTRACK_LIMIT)
        .build()
}

/// The `X` of a pattern that is exactly one `(?=X)` group.
///
/// At a fixed position `(?=X)` and `X` succeed or fail together. Without the
/// lookahead, patterns free of other lookaround compile for the plain regex
/// engine, whose anchored search does not walk the rest of the input.
fn lookahead_body(pattern: &str) -> Option<&str> {
    let body = pattern.strip_prefix("(?=")?.strip_suffix(')')?;
    balanced(body).then_some(body)
}

/// Whether every group opened in `pattern` is closed inside it.
fn balanced(pattern: &str) -> bool {
    let mut depth = 0usize;
    let mut in_class = false;
    let mut chars = pattern.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                chars.next();
            }
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            '(' if !in_class => depth += 1,
            ')' if !in_class => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0 && !in_class
}

fn delimiter(kind: ChunkKind, pattern: &str) -> Result<Regex, GrammarError> {
    build(&format!("{FLAGS}{pattern}")).map_err(|err| GrammarError::Delimiter {
        kind,
        source: Box::new(err),
    })
}

/// Source of a rule's delimiter matcher.
///
/// A sibling list becomes an alternation of each sibling's after-break
/// pattern (or its start pattern when it has none), in list order.
fn delimiter_pattern(rules: &[Rule], rule: &Rule) -> Option<String> {
    match rule.stop? {
        Stop::Pattern(pattern) => Some(pattern.to_owned()),
        Stop::Siblings(siblings) => {
            let alternatives: Vec<String> = siblings
                .iter()
                .filter_map(|&sibling| {
                    let found = lookup(rules, sibling)?;
                    found.start_after_break.or(found.start)
                })
                .map(|pattern| format!("(?:{pattern})"))
                .collect();
            (!alternatives.is_empty()).then(|| alternatives.join("|"))
        }
    }
}

fn hint_index(rules: &[Rule], rule: &Rule) -> FxHashMap<char, Candidates> {
    let mut index: FxHashMap<char, Candidates> = FxHashMap::default();
    for &child in rule.children {
        let Some(found) = lookup(rules, child) else {
            log::debug!("`{}` lists `{child}` which has no rule", rule.kind);
            continue;
        };
        let mut add = |ch: char| index.entry(ch).or_default().push(child);
        match found.hint {
            Hint::None => {}
            Hint::Chars(chars) => chars.iter().copied().for_each(&mut add),
            Hint::Plain => plain_chars().for_each(&mut add),
        }
    }
    index
}

fn lookup(rules: &[Rule], kind: ChunkKind) -> Option<&Rule> {
    rules.get(kind as usize).filter(|r| r.kind == kind)
}
