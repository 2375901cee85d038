//! Render policies: per-node-kind rendering hooks.
//!
//! A policy receives the already-rendered inline HTML of a block and decides
//! how to wrap it. Every hook has a default that matches pulldown-cmark's own
//! output, so an implementation only overrides the node kinds it cares about.

use pulldown_cmark::HeadingLevel;

use crate::bilingual::BilingualBlock;
use crate::markup::{escape_html, SECTION_TITLE_CLASS};

/// Label on the affordance that reveals the original text.
pub const DEFAULT_TOGGLE_LABEL: &str = "[查看此处原文]";

/// Hooks invoked by [`render_html`](crate::render_html).
pub trait RenderPolicy {
    /// Render a paragraph whose inline content is `text`.
    fn paragraph(&self, text: &str) -> String {
        format!("<p>{}</p>\n", text)
    }

    /// Render a list item whose content is `text`.
    ///
    /// `text` starts with a newline when the item opens with a block, such as
    /// the paragraphs of a loose list.
    fn list_item(&self, text: &str) -> String {
        format!("<li>{}</li>\n", text)
    }

    /// Render a heading.
    ///
    /// `text` is the inline HTML of the heading, `plain` its text content.
    fn heading(&self, text: &str, plain: &str, level: HeadingLevel) -> String {
        let _ = plain;
        format!("<{level}>{text}</{level}>\n")
    }
}

/// pulldown-cmark's default rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasePolicy;

impl RenderPolicy for BasePolicy {}

/// Recognizes bilingual paragraphs and anchors every heading.
///
/// Anything that is not a bilingual block is handed to the wrapped policy.
#[derive(Debug, Clone)]
pub struct BilingualPolicy<P = BasePolicy> {
    base: P,
    toggle_label: String,
}

impl BilingualPolicy<BasePolicy> {
    pub fn new() -> Self {
        Self::with_base(BasePolicy)
    }
}

impl Default for BilingualPolicy<BasePolicy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: RenderPolicy> BilingualPolicy<P> {
    /// Wrap an existing policy.
    pub fn with_base(base: P) -> Self {
        Self {
            base,
            toggle_label: DEFAULT_TOGGLE_LABEL.to_string(),
        }
    }

    /// Set the label of the "view original" affordance.
    pub fn toggle_label(mut self, label: impl Into<String>) -> Self {
        self.toggle_label = label.into();
        self
    }
}

impl<P: RenderPolicy> RenderPolicy for BilingualPolicy<P> {
    fn paragraph(&self, text: &str) -> String {
        match BilingualBlock::parse(text) {
            Some(block) => block.to_html(&self.toggle_label),
            None => self.base.paragraph(text),
        }
    }

    fn list_item(&self, text: &str) -> String {
        match BilingualBlock::parse(text) {
            Some(block) => block.to_html(&self.toggle_label),
            None => self.base.list_item(text),
        }
    }

    fn heading(&self, text: &str, plain: &str, level: HeadingLevel) -> String {
        let name = escape_html(plain);
        format!(
            concat!(
                "<{level} class=\"{class}\">",
                "<a name=\"{name}\" class=\"anchor\" href=\"#{name}\">",
                "<span class=\"header-link\"></span></a>",
                "{text}</{level}>\n"
            ),
            level = level,
            class = SECTION_TITLE_CLASS,
            name = name,
            text = text,
        )
    }
}
