//! The page the artifact is attached to.

use kuchikikiki::NodeRef;

use bilingo_md::{ITEM_ROLE, ORIGINAL_ROLE, TOGGLE_ROLE};

use crate::dom::{
    has_class, has_role, new_element, parse_document, parse_fragment, replace_children, to_html,
    toggle_attr,
};
use crate::error::ClientError;
use crate::nav::{block_index, Navigator, Outline, DEFAULT_SCROLL_THRESHOLD, NAV_BLOCK_CLASS};

pub const CONTAINER_SELECTOR: &str = "[role=\"container\"]";
pub const NAV_SELECTOR: &str = "[role=\"nav\"]";

/// `role` of the wrapper the fetched content is placed in.
pub const CONTENT_ROLE: &str = "file-content";

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickEffect {
    /// A bilingual block's original text was shown or hidden
    Toggled { visible: bool },
    /// A navigation block became the active one
    Activated(usize),
    /// The click hit nothing interactive
    Ignored,
}

/// A parsed page with a content container and a navigation bar.
pub struct Page {
    document: NodeRef,
    container: NodeRef,
    nav_bar: NodeRef,
    navigator: Option<Navigator>,
    scroll_threshold: f64,
}

impl Page {
    /// Parse a page. Both the container and the nav bar must be present.
    pub fn parse(html: &str) -> Result<Self, ClientError> {
        let document = parse_document(html);

        let container = document
            .select_first(CONTAINER_SELECTOR)
            .map_err(|()| ClientError::MissingRegion(CONTAINER_SELECTOR))?
            .as_node()
            .clone();
        let nav_bar = document
            .select_first(NAV_SELECTOR)
            .map_err(|()| ClientError::MissingRegion(NAV_SELECTOR))?
            .as_node()
            .clone();

        Ok(Self {
            document,
            container,
            nav_bar,
            navigator: None,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
        })
    }

    /// Set the scroll offset past which the nav bar is pinned.
    pub fn with_scroll_threshold(mut self, threshold: f64) -> Self {
        self.scroll_threshold = threshold;
        self
    }

    pub fn document(&self) -> &NodeRef {
        &self.document
    }

    pub fn container(&self) -> &NodeRef {
        &self.container
    }

    pub fn nav_bar(&self) -> &NodeRef {
        &self.nav_bar
    }

    pub fn navigator(&self) -> Option<&Navigator> {
        self.navigator.as_ref()
    }

    /// Wrap `html` in the content wrapper and append it to the container.
    ///
    /// Returns the wrapper node.
    pub fn attach(&self, html: &str) -> NodeRef {
        let wrapper = new_element("div", &[("role", CONTENT_ROLE), ("class", "content")]);

        for node in parse_fragment(html) {
            wrapper.append(node);
        }
        self.container.append(wrapper.clone());

        wrapper
    }

    /// Derive the outline from `root` and render it into the nav bar.
    ///
    /// Returns the number of sections.
    pub fn build_navigation(&mut self, root: &NodeRef) -> usize {
        let navigator = Navigator::new(Outline::from_dom(root), self.scroll_threshold);

        replace_children(&self.nav_bar, parse_fragment(&navigator.render()));
        navigator.sync(&self.nav_bar);

        let sections = navigator.outline().len();
        self.navigator = Some(navigator);
        sections
    }

    /// Handle a click on `target`, delegated from the document.
    ///
    /// A click inside a "view original" affordance flips the hidden state of
    /// that block's original text and nothing else. A click inside a
    /// navigation block makes it the single active block.
    pub fn handle_click(&mut self, target: &NodeRef) -> ClickEffect {
        for node in target.inclusive_ancestors() {
            if has_role(&node, TOGGLE_ROLE) {
                return match original_of(&node) {
                    Some(original) => ClickEffect::Toggled {
                        visible: !toggle_attr(&original, "hidden"),
                    },
                    None => ClickEffect::Ignored,
                };
            }

            if has_class(&node, NAV_BLOCK_CLASS) {
                let (Some(navigator), Some(index)) = (self.navigator.as_mut(), block_index(&node)) else {
                    return ClickEffect::Ignored;
                };
                if !navigator.activate(index) {
                    return ClickEffect::Ignored;
                }
                navigator.sync(&self.nav_bar);
                return ClickEffect::Activated(index);
            }
        }

        ClickEffect::Ignored
    }

    /// Sync the pinned state of the nav bar with a scroll offset.
    ///
    /// Safe to call on every scroll tick.
    pub fn on_scroll(&mut self, offset: f64) {
        if let Some(navigator) = self.navigator.as_mut() {
            navigator.on_scroll(offset);
            navigator.sync(&self.nav_bar);
        }
    }

    /// Every "view original" affordance, in document order.
    pub fn toggles(&self) -> Vec<NodeRef> {
        let selector = format!("[role=\"{}\"]", TOGGLE_ROLE);
        match self.container.select(&selector) {
            Ok(selection) => selection.map(|t| t.as_node().clone()).collect(),
            Err(()) => Vec::new(),
        }
    }

    /// Serialize the whole page.
    pub fn to_html(&self) -> String {
        to_html(&self.document)
    }
}

/// The original-text element belonging to a toggle's bilingual block.
fn original_of(toggle: &NodeRef) -> Option<NodeRef> {
    let block = toggle
        .inclusive_ancestors()
        .find(|node| has_role(node, ITEM_ROLE))?;
    let selector = format!("[role=\"{}\"]", ORIGINAL_ROLE);

    block
        .select_first(&selector)
        .ok()
        .map(|original| original.as_node().clone())
}
