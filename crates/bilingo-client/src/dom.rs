//! Small helpers over the kuchikikiki DOM.

use html5ever::{local_name, ns, LocalName, QualName};
use kuchikikiki::traits::*;
use kuchikikiki::{Attribute, ExpandedName, NodeRef};

/// Parse a complete HTML document.
pub fn parse_document(html: &str) -> NodeRef {
    kuchikikiki::parse_html().one(html)
}

/// Parse an HTML fragment into detached top-level nodes.
///
/// The fragment is parsed as the content of a `<div>`, so every node stays in
/// source order, including `<style>`, `<script>` and comments.
pub fn parse_fragment(html: &str) -> Vec<NodeRef> {
    let context = QualName::new(None, ns!(html), local_name!("div"));
    let document = kuchikikiki::parse_fragment(context, Vec::new()).one(html);

    // The parser roots the fragment under a single `<html>` element.
    let Some(root) = document.first_child() else {
        return Vec::new();
    };

    let nodes: Vec<NodeRef> = root.children().collect();
    for node in &nodes {
        node.detach();
    }
    nodes
}

/// Create a detached HTML element.
pub fn new_element(name: &str, attributes: &[(&str, &str)]) -> NodeRef {
    NodeRef::new_element(
        QualName::new(None, ns!(html), LocalName::from(name)),
        attributes.iter().map(|&(key, value)| {
            (
                ExpandedName::new(ns!(), key),
                Attribute {
                    prefix: None,
                    value: value.to_string(),
                },
            )
        }),
    )
}

/// Replace all children of `parent` with `children`.
pub fn replace_children(parent: &NodeRef, children: Vec<NodeRef>) {
    let old: Vec<NodeRef> = parent.children().collect();
    for child in old {
        child.detach();
    }
    for child in children {
        parent.append(child);
    }
}

/// Serialize a node, including itself.
pub fn to_html(node: &NodeRef) -> String {
    let mut out = Vec::new();
    if node.serialize(&mut out).is_err() {
        return String::new();
    }
    String::from_utf8(out).unwrap_or_default()
}

/// Serialize the children of a node.
#[cfg(test)]
pub(crate) fn inner_html(node: &NodeRef) -> String {
    node.children().map(|child| to_html(&child)).collect()
}

/// Read an attribute of an element node.
pub fn attr(node: &NodeRef, name: &str) -> Option<String> {
    let element = node.as_element()?;
    let attributes = element.attributes.borrow();
    attributes.get(name).map(str::to_string)
}

pub fn has_attr(node: &NodeRef, name: &str) -> bool {
    node.as_element()
        .map(|element| element.attributes.borrow().contains(name))
        .unwrap_or(false)
}

/// Whether the element's `role` attribute equals `role`.
pub fn has_role(node: &NodeRef, role: &str) -> bool {
    attr(node, "role").as_deref() == Some(role)
}

pub fn has_class(node: &NodeRef, class: &str) -> bool {
    attr(node, "class")
        .map(|value| value.split_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

/// Add or remove `class` so that its presence equals `on`.
///
/// Calling this repeatedly with the same arguments leaves the element as is.
pub fn set_class(node: &NodeRef, class: &str, on: bool) {
    let Some(element) = node.as_element() else {
        return;
    };
    let mut attributes = element.attributes.borrow_mut();

    let mut classes: Vec<String> = attributes
        .get("class")
        .map(|value| value.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();

    let present = classes.iter().any(|c| c == class);
    if present == on {
        return;
    }

    if on {
        classes.push(class.to_string());
    } else {
        classes.retain(|c| c != class);
    }

    if classes.is_empty() {
        attributes.remove("class");
    } else {
        attributes.insert("class", classes.join(" "));
    }
}

/// Flip a boolean attribute. Returns whether it is present afterwards.
pub fn toggle_attr(node: &NodeRef, name: &str) -> bool {
    let Some(element) = node.as_element() else {
        return false;
    };
    let mut attributes = element.attributes.borrow_mut();

    if attributes.contains(name) {
        attributes.remove(name);
        false
    } else {
        attributes.insert(name, String::new());
        true
    }
}
