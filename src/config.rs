//! Rendering configuration: extension hooks and template overrides.
//!
//! A [`Config`] is built up front and passed by reference into every
//! render, so the compiled grammar never changes and one configuration can
//! be shared between threads.

use crate::grammar::{ChunkKind, Rule};
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

/// A text transform supplied by the embedding application.
pub type Hook = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Which half of a chunk's template to replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateSlot {
    /// Emitted before the chunk's content.
    Prefix,
    /// Emitted after the chunk's content.
    Suffix,
}

/// One row of [`Config::list_templates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateEntry<'a> {
    pub kind: ChunkKind,
    pub prefix: &'a str,
    pub suffix: &'a str,
}

/// Extension hooks and template overrides for rendering.
#[derive(Clone, Default)]
pub struct Config {
    link: Option<Hook>,
    bare_link: Option<Hook>,
    image: Option<Hook>,
    plugin: Option<Hook>,
    custom_links: bool,
    custom_bare_links: bool,
    custom_images: bool,
    templates: FxHashMap<(ChunkKind, TemplateSlot), String>,
}

impl Config {
    /// The default configuration: no hooks, built-in templates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform the URL part of `[[ url | text ]]` links (already trimmed).
    ///
    /// In custom link mode the hook receives the whole link markup instead.
    #[must_use]
    pub fn with_link_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.link = Some(Arc::new(hook));
        self
    }

    #[must_use]
    pub fn without_link_hook(mut self) -> Self {
        self.link = None;
        self
    }

    /// Transform bare links such as `http://example.com`.
    #[must_use]
    pub fn with_bare_link_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.bare_link = Some(Arc::new(hook));
        self
    }

    #[must_use]
    pub fn without_bare_link_hook(mut self) -> Self {
        self.bare_link = None;
        self
    }

    /// Transform the source URL of `{{ src | alt }}` images.
    #[must_use]
    pub fn with_image_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.image = Some(Arc::new(hook));
        self
    }

    #[must_use]
    pub fn without_image_hook(mut self) -> Self {
        self.image = None;
        self
    }

    /// Render `<< plugin >>` and `<<< plugin >>>` markup.
    ///
    /// The hook receives the text between the delimiters. Without a hook the
    /// plugin markup is emitted as written.
    #[must_use]
    pub fn with_plugin_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.plugin = Some(Arc::new(hook));
        self
    }

    #[must_use]
    pub fn without_plugin_hook(mut self) -> Self {
        self.plugin = None;
        self
    }

    /// Replace the open or close template of `kind`.
    #[must_use]
    pub fn with_template(mut self, kind: ChunkKind, slot: TemplateSlot, text: impl Into<String>) -> Self {
        self.templates.insert((kind, slot), text.into());
        self
    }

    /// Replace a template by tag name, e.g. `("li", Prefix, "<li class=x>")`.
    ///
    /// Names that are not chunk kinds are ignored.
    #[must_use]
    pub fn override_template(self, name: &str, slot: TemplateSlot, text: impl Into<String>) -> Self {
        match name.parse::<ChunkKind>() {
            Ok(kind) => self.with_template(kind, slot, text),
            Err(err) => {
                log::debug!("ignoring template override: {err}");
                self
            }
        }
    }

    /// Hand whole `[[ ... ]]` link markup to the link hook.
    ///
    /// The link is no longer split into URL and text, and its templates are
    /// cleared, so the hook's output is the complete rendering.
    #[must_use]
    pub fn with_custom_links(mut self) -> Self {
        self.custom_links = true;
        self.clear_templates(ChunkKind::Link).clear_templates(ChunkKind::LinkHref)
    }

    /// Hand bare links to the bare link hook verbatim, without templates.
    #[must_use]
    pub fn with_custom_bare_links(mut self) -> Self {
        self.custom_bare_links = true;
        self.clear_templates(ChunkKind::BareLink)
    }

    /// Hand whole `{{ ... }}` image markup to the image hook.
    #[must_use]
    pub fn with_custom_images(mut self) -> Self {
        self.custom_images = true;
        self.clear_templates(ChunkKind::Image)
    }

    fn clear_templates(self, kind: ChunkKind) -> Self {
        self.with_template(kind, TemplateSlot::Prefix, "")
            .with_template(kind, TemplateSlot::Suffix, "")
    }

    /// Whether link markup goes to the link hook whole.
    #[inline]
    pub fn custom_links(&self) -> bool {
        self.custom_links
    }

    #[inline]
    pub fn custom_bare_links(&self) -> bool {
        self.custom_bare_links
    }

    #[inline]
    pub fn custom_images(&self) -> bool {
        self.custom_images
    }

    /// The open template for `kind`.
    pub fn prefix(&self, kind: ChunkKind) -> &str {
        self.template(kind, TemplateSlot::Prefix)
    }

    /// The close template for `kind`.
    pub fn suffix(&self, kind: ChunkKind) -> &str {
        self.template(kind, TemplateSlot::Suffix)
    }

    /// Open and close templates for `kind`, overrides first.
    pub fn templates(&self, kind: ChunkKind) -> (&str, &str) {
        (self.prefix(kind), self.suffix(kind))
    }

    fn template(&self, kind: ChunkKind, slot: TemplateSlot) -> &str {
        self.resolve(kind.rule(), slot)
    }

    /// A template of `rule`, or its override.
    pub(crate) fn resolve<'a>(&'a self, rule: &'a Rule, slot: TemplateSlot) -> &'a str {
        if let Some(text) = self.templates.get(&(rule.kind, slot)) {
            return text;
        }
        match slot {
            TemplateSlot::Prefix => rule.prefix,
            TemplateSlot::Suffix => rule.suffix,
        }
    }

    /// Kinds a chunk of `rule` recurses into under this configuration.
    ///
    /// Custom link and image modes turn those kinds into leaves.
    pub fn children(&self, rule: &'static Rule) -> &'static [ChunkKind] {
        if self.is_custom_leaf(rule.kind) {
            &[]
        } else {
            rule.children
        }
    }

    /// Whether a custom mode keeps `kind` from being split into children.
    #[inline]
    pub fn is_custom_leaf(&self, kind: ChunkKind) -> bool {
        match kind {
            ChunkKind::Link => self.custom_links,
            ChunkKind::Image => self.custom_images,
            _ => false,
        }
    }

    pub(crate) fn link_hook(&self) -> Option<&Hook> {
        self.link.as_ref()
    }

    pub(crate) fn bare_link_hook(&self) -> Option<&Hook> {
        self.bare_link.as_ref()
    }

    pub(crate) fn image_hook(&self) -> Option<&Hook> {
        self.image.as_ref()
    }

    pub(crate) fn plugin_hook(&self) -> Option<&Hook> {
        self.plugin.as_ref()
    }

    /// Current templates of every HTML-producing kind, sorted by tag name.
    ///
    /// A kind is listed when its open template contains a `<`.
    pub fn list_templates(&self) -> Vec<TemplateEntry<'_>> {
        let mut entries: Vec<TemplateEntry<'_>> = ChunkKind::ALL
            .iter()
            .map(|&kind| TemplateEntry {
                kind,
                prefix: self.prefix(kind),
                suffix: self.suffix(kind),
            })
            .filter(|entry| entry.prefix.contains('<'))
            .collect();
        entries.sort_by_key(|entry| entry.kind.name());
        entries
    }

    /// [`Config::list_templates`] as text, one `name: open(..) close(..)`
    /// line per kind with newlines shown as `\n`.
    pub fn describe_templates(&self) -> String {
        let mut out = String::new();
        for entry in self.list_templates() {
            out.push_str(&format!(
                "{}: open({}) close({})\n",
                entry.kind,
                entry.prefix.replace('\n', "\\n"),
                entry.suffix.replace('\n', "\\n"),
            ));
        }
        out
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("link", &self.link.is_some())
            .field("bare_link", &self.bare_link.is_some())
            .field("image", &self.image.is_some())
            .field("plugin", &self.plugin.is_some())
            .field("custom_links", &self.custom_links)
            .field("custom_bare_links", &self.custom_bare_links)
            .field("custom_images", &self.custom_images)
            .field("templates", &self.templates.len())
            .finish()
    }
}
