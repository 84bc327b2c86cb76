//! Annotated document tree
//!
//! The host document is modeled as a flat arena of elements addressed by
//! index, with parent/child structure kept as index lists. The binding
//! pass iterates the arena in depth-first pre-order (discovery order) and
//! mutates elements in place; it never creates or destroys nodes.
//!
//! On disk a document is a nested YAML mapping (`tag` / `attrs` / `text` /
//! `children`), flattened into the arena on load and rebuilt on save.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::WeftError;

/// Well-known attribute names
pub mod attr {
    /// Path declaration; marks an element as bindable
    pub const BIND: &str = "data-bind";
    /// Optional explicit update kind (defaults to `auto`)
    pub const UPDATE: &str = "data-update";
    /// Deferred-load image source, consumed by an external lazy loader
    pub const DEFERRED_SRC: &str = "data-src";
    /// Immediate image source; the engine never writes this
    pub const SRC: &str = "src";
    pub const COPY: &str = "data-copy";
    pub const MESSAGE: &str = "data-message";
    pub const PLACEHOLDER: &str = "placeholder";
    pub const HREF: &str = "href";
    pub const CONTENT: &str = "content";
    pub const VALUE: &str = "value";
    /// Host countdown marker, stamped once from the event schedule
    pub const TIME: &str = "data-time";
}

/// One node of the document tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: BTreeMap<String, String>,
    text: String,
    children: Vec<usize>,
}

impl Element {
    /// Create an element. Tags are normalized to lowercase.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            attrs: BTreeMap::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter for programmatic construction
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn children(&self) -> &[usize] {
        &self.children
    }
}

/// Flat-arena document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Element>,
    roots: Vec<usize>,
}

/// Nested on-disk form of one element
#[derive(Debug, Clone, Serialize, Deserialize)]
struct NodeSpec {
    tag: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    attrs: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<NodeSpec>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element under `parent` (or as a root when `None`).
    /// Returns the new element's arena index.
    pub fn add(&mut self, parent: Option<usize>, element: Element) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(element);
        match parent {
            Some(p) => self.nodes[p].children.push(idx),
            None => self.roots.push(idx),
        }
        idx
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    pub fn node(&self, idx: usize) -> &Element {
        &self.nodes[idx]
    }

    pub fn node_mut(&mut self, idx: usize) -> &mut Element {
        &mut self.nodes[idx]
    }

    /// Arena indices in depth-first pre-order (discovery order)
    pub fn pre_order(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<usize> = self.roots.iter().rev().copied().collect();

        while let Some(idx) = stack.pop() {
            order.push(idx);
            for &child in self.nodes[idx].children.iter().rev() {
                stack.push(child);
            }
        }

        order
    }

    /// Whether any direct child of `idx` carries the given tag
    pub fn has_child_tag(&self, idx: usize, tag: &str) -> bool {
        self.nodes[idx]
            .children
            .iter()
            .any(|&child| self.nodes[child].tag == tag)
    }

    pub fn from_yaml(source: &str) -> Result<Self, WeftError> {
        let spec: NodeSpec = serde_yaml::from_str(source)?;
        let mut doc = Self::new();
        doc.add_spec(None, spec);
        Ok(doc)
    }

    fn add_spec(&mut self, parent: Option<usize>, spec: NodeSpec) {
        let element = Element {
            tag: spec.tag.to_ascii_lowercase(),
            attrs: spec.attrs,
            text: spec.text,
            children: Vec::new(),
        };
        let idx = self.add(parent, element);
        for child in spec.children {
            self.add_spec(Some(idx), child);
        }
    }

    pub fn to_yaml(&self) -> Result<String, WeftError> {
        let specs: Vec<NodeSpec> = self.roots.iter().map(|&r| self.to_spec(r)).collect();
        let yaml = match specs.as_slice() {
            [single] => serde_yaml::to_string(single)?,
            _ => serde_yaml::to_string(&specs)?,
        };
        Ok(yaml)
    }

    fn to_spec(&self, idx: usize) -> NodeSpec {
        let node = &self.nodes[idx];
        NodeSpec {
            tag: node.tag.clone(),
            attrs: node.attrs.clone(),
            text: node.text.clone(),
            children: node.children.iter().map(|&c| self.to_spec(c)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
tag: body
children:
  - tag: h1
    attrs:
      data-bind: couple.namesShort
  - tag: div
    children:
      - tag: img
        attrs:
          data-bind: couple.groom.photo
      - tag: span
        text: static caption
"#;

    #[test]
    fn from_yaml_flattens_tree() {
        let doc = Document::from_yaml(SAMPLE).unwrap();
        assert_eq!(doc.len(), 5);
        assert_eq!(doc.roots().len(), 1);
        assert_eq!(doc.node(doc.roots()[0]).tag(), "body");
    }

    #[test]
    fn pre_order_is_discovery_order() {
        let doc = Document::from_yaml(SAMPLE).unwrap();
        let tags: Vec<&str> = doc.pre_order().into_iter().map(|i| doc.node(i).tag()).collect();
        assert_eq!(tags, vec!["body", "h1", "div", "img", "span"]);
    }

    #[test]
    fn tags_are_normalized_to_lowercase() {
        let doc = Document::from_yaml("tag: IMG").unwrap();
        assert_eq!(doc.node(0).tag(), "img");
    }

    #[test]
    fn yaml_round_trip_is_stable() {
        let doc = Document::from_yaml(SAMPLE).unwrap();
        let emitted = doc.to_yaml().unwrap();
        let reparsed = Document::from_yaml(&emitted).unwrap();
        assert_eq!(doc, reparsed);
    }

    #[test]
    fn add_builds_parent_child_links() {
        let mut doc = Document::new();
        let body = doc.add(None, Element::new("body"));
        let button = doc.add(
            Some(body),
            Element::new("button").with_attr(attr::COPY, "1234"),
        );
        doc.add(Some(button), Element::new("i"));

        assert_eq!(doc.node(body).children(), &[button]);
        assert!(doc.has_child_tag(button, "i"));
        assert!(!doc.has_child_tag(body, "i"));
    }

    #[test]
    fn attr_accessors() {
        let mut el = Element::new("input").with_attr(attr::PLACEHOLDER, "Your name");
        assert!(el.has_attr(attr::PLACEHOLDER));
        assert_eq!(el.attr(attr::PLACEHOLDER), Some("Your name"));

        el.set_attr(attr::VALUE, "Riana");
        assert_eq!(el.attr(attr::VALUE), Some("Riana"));
        assert_eq!(el.attr("missing"), None);
    }
}
