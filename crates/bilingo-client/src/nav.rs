//! Side navigation derived from the headings of the attached content.

use kuchikikiki::NodeRef;
use serde::Serialize;

use bilingo_md::{escape_html, SECTION_TITLE_CLASS};

use crate::dom::{attr, set_class};

/// Scroll offset, in pixels, past which the nav bar is pinned.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 60.0;

pub const NAV_BLOCK_CLASS: &str = "nav-block";
pub const ACTIVE_CLASS: &str = "active";
pub const SCROLLED_CLASS: &str = "scrolled";

/// A top-level heading and the second-level headings under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub subtitles: Vec<String>,
}

/// Two-level outline of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Outline {
    pub sections: Vec<Section>,
}

impl Outline {
    /// Scan the section titles under `root` in document order.
    ///
    /// Titles are the headings' anchor names, so nav links always resolve.
    /// An `h2` before any `h1` has no section to join and is dropped. Deeper
    /// headings are not part of the outline.
    pub fn from_dom(root: &NodeRef) -> Self {
        let selector = format!(".{}", SECTION_TITLE_CLASS);
        let Ok(headings) = root.select(&selector) else {
            return Self::default();
        };

        let mut sections: Vec<Section> = Vec::new();

        for heading in headings {
            let title = anchor_name(heading.as_node());

            match &*heading.name.local {
                "h1" => sections.push(Section {
                    title,
                    subtitles: Vec::new(),
                }),
                "h2" => match sections.last_mut() {
                    Some(section) => section.subtitles.push(title),
                    None => tracing::warn!("Dropping sub-section {:?}: no section before it", title),
                },
                _ => {}
            }
        }

        Self { sections }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Navigation state: the outline, the active block and the pinned flag.
#[derive(Debug, Clone)]
pub struct Navigator {
    outline: Outline,
    active: Option<usize>,
    scrolled: bool,
    threshold: f64,
}

impl Navigator {
    pub fn new(outline: Outline, threshold: f64) -> Self {
        Self {
            outline,
            active: None,
            scrolled: false,
            threshold,
        }
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// Index of the active navigation block.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Make block `index` the only active one. Out-of-range indexes are ignored.
    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.outline.len() {
            return false;
        }
        self.active = Some(index);
        true
    }

    /// Update the pinned state from the page's vertical scroll offset.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.scrolled = offset > self.threshold;
        self.scrolled
    }

    /// Navigation markup, one block per section.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for (index, section) in self.outline.sections.iter().enumerate() {
            let title = escape_html(&section.title);
            out.push_str(&format!(
                "<div class=\"{}\" data-index=\"{}\"><a class=\"nav-title\" href=\"#{}\">{}</a>",
                NAV_BLOCK_CLASS, index, title, title
            ));

            if !section.subtitles.is_empty() {
                out.push_str("<ul class=\"nav-sub\">");
                for subtitle in &section.subtitles {
                    let subtitle = escape_html(subtitle);
                    out.push_str(&format!("<li><a href=\"#{}\">{}</a></li>", subtitle, subtitle));
                }
                out.push_str("</ul>");
            }

            out.push_str("</div>");
        }

        out
    }

    /// Write the active and pinned state into the nav bar's classes.
    pub fn sync(&self, nav_bar: &NodeRef) {
        set_class(nav_bar, SCROLLED_CLASS, self.scrolled);

        let selector = format!(".{}", NAV_BLOCK_CLASS);
        let Ok(blocks) = nav_bar.select(&selector) else {
            return;
        };

        for block in blocks {
            let node = block.as_node();
            let index = block_index(node);
            set_class(node, ACTIVE_CLASS, index.is_some() && index == self.active);
        }
    }
}

/// `name` of a heading's anchor, or its text when it has none.
fn anchor_name(heading: &NodeRef) -> String {
    heading
        .select_first("a.anchor")
        .ok()
        .and_then(|anchor| attr(anchor.as_node(), "name"))
        .unwrap_or_else(|| heading.text_contents())
}

/// `data-index` of a navigation block.
pub fn block_index(node: &NodeRef) -> Option<usize> {
    attr(node, "data-index")?.parse().ok()
}
