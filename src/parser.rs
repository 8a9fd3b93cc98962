//! The recursive chunk parser.
//!
//! Each call walks one string under one container kind: identify the child
//! that starts at the scan position, find where it ends, filter the slice,
//! then either emit it or render it again under the child's own kind.

use crate::config::{Config, TemplateSlot};
use crate::grammar::{grammar, ChunkKind, Grammar};
use crate::limits::MAX_NESTING_DEPTH;
use crate::render::HtmlWriter;
use std::borrow::Cow;

/// Renders text against a compiled grammar and a configuration.
///
/// Holds no scan state of its own, so one parser can render any number of
/// documents, from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'a> {
    grammar: &'a Grammar,
    config: &'a Config,
}

impl<'a> Parser<'a> {
    /// A parser over the built-in Creole grammar.
    pub fn new(config: &'a Config) -> Self {
        Self::with_grammar(grammar(), config)
    }

    /// A parser over any compiled grammar.
    pub fn with_grammar(grammar: &'a Grammar, config: &'a Config) -> Self {
        Self { grammar, config }
    }

    /// Render a whole document.
    pub fn render(&self, text: &str) -> String {
        let mut out = HtmlWriter::with_capacity_for(text.len());
        self.render_into(text, ChunkKind::Top, &mut out);
        out.into_string()
    }

    /// Render `text` as the content of a `container` chunk.
    pub fn render_into(&self, text: &str, container: ChunkKind, out: &mut HtmlWriter) {
        self.render_level(text, container, 0, out);
    }

    fn render_level(&self, text: &str, container: ChunkKind, depth: usize, out: &mut HtmlWriter) {
        let mut pos = 0;
        while pos < text.len() {
            let Some(kind) = self.grammar.identify(text, container, pos) else {
                log::debug!("no `{container}` child starts at {pos}, {} bytes left", text.len() - pos);
                break;
            };
            let Some(rule) = self.grammar.rule(kind) else {
                break;
            };

            let start = pos;
            pos = self.grammar.chunk_end(kind, text, start);
            log::trace!("{container} > {kind} [{start}..{pos}]");

            let raw = &text[start..pos];
            let content = match rule.filter {
                Some(filter) => filter.apply(raw, self.config),
                None => Cow::Borrowed(raw),
            };

            out.write_str(self.config.resolve(rule, TemplateSlot::Prefix));
            if self.config.children(rule).is_empty() {
                out.write_str(&content);
            } else if depth >= MAX_NESTING_DEPTH {
                log::debug!("nesting limit reached in `{kind}`, emitting content as is");
                out.write_str(&content);
            } else {
                self.render_level(&content, kind, depth + 1, out);
            }
            out.write_str(self.config.resolve(rule, TemplateSlot::Suffix));
        }
    }
}
