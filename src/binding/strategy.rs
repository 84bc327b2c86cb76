//! Element descriptors and mutation strategies
//!
//! Auto-inference is a pure function from a capability [`Descriptor`] to a
//! [`Strategy`], evaluated as a fixed priority list. Tag-based rules come
//! before attribute-based rules: an element's tag is a stronger signal
//! than the attributes it happens to carry, so an `img` that also has a
//! `data-copy` attribute still gets the deferred-source strategy.

use serde_json::Value;

use crate::binding::UpdateKind;
use crate::document::{attr, Document, Element};
use crate::error::WeftError;

/// Capability snapshot of one element, taken before mutation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Descriptor {
    /// Carries a deferred-source slot (an `img`)
    pub image_like: bool,
    /// Carries a link-target slot (an `a`)
    pub link_like: bool,
    /// External-resource reference (`link`) that already has a target
    pub resource_ref_with_target: bool,
    /// Metadata element (`meta`)
    pub metadata: bool,
    /// Document title element (`title`)
    pub title_like: bool,
    /// Text-entry element (`input` / `textarea`)
    pub text_input: bool,
    /// Already declares a placeholder hint
    pub has_placeholder_attr: bool,
    /// Selectable list item (`option`)
    pub option_like: bool,
    /// Already carries a "copy" data attribute
    pub has_copy_attr: bool,
    /// Has a decorative icon child (`i`), which text updates must not clobber
    pub has_icon_child: bool,
}

impl Descriptor {
    /// Snapshot the capabilities of the element at `idx`
    pub fn of(doc: &Document, idx: usize) -> Self {
        let el = doc.node(idx);
        Self {
            image_like: el.tag() == "img",
            link_like: el.tag() == "a",
            resource_ref_with_target: el.tag() == "link" && el.has_attr(attr::HREF),
            metadata: el.tag() == "meta",
            title_like: el.tag() == "title",
            text_input: matches!(el.tag(), "input" | "textarea"),
            has_placeholder_attr: el.has_attr(attr::PLACEHOLDER),
            option_like: el.tag() == "option",
            has_copy_attr: el.has_attr(attr::COPY),
            has_icon_child: doc.has_child_tag(idx, "i"),
        }
    }
}

/// Concrete mutation applied to an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Replace visible text content
    Text,
    /// Set the placeholder hint
    Placeholder,
    /// Write the deferred-load source attribute
    DeferredSource,
    /// Set the link target
    Href,
    /// Set the metadata content attribute
    MetaContent,
    /// Set the "message" data attribute
    DataMessage,
    /// Set the "copy" data attribute only
    DataCopy,
    /// Set the current input value
    InputValue,
    /// Set the "copy" data attribute and the text content
    CopyAndText,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Text => "text",
            Strategy::Placeholder => "placeholder",
            Strategy::DeferredSource => "deferred-source",
            Strategy::Href => "href",
            Strategy::MetaContent => "meta-content",
            Strategy::DataMessage => "data-message",
            Strategy::DataCopy => "data-copy",
            Strategy::InputValue => "input-value",
            Strategy::CopyAndText => "copy-and-text",
        }
    }

    /// Infer a strategy from element shape. First match wins.
    pub fn infer(d: &Descriptor) -> Strategy {
        if d.image_like {
            Strategy::DeferredSource
        } else if d.link_like {
            Strategy::Href
        } else if d.resource_ref_with_target {
            Strategy::Href
        } else if d.metadata {
            Strategy::MetaContent
        } else if d.title_like {
            Strategy::Text
        } else if d.text_input {
            if d.has_placeholder_attr {
                Strategy::Placeholder
            } else {
                Strategy::InputValue
            }
        } else if d.option_like {
            Strategy::Text
        } else if d.has_copy_attr {
            if d.has_icon_child {
                Strategy::DataCopy
            } else {
                Strategy::CopyAndText
            }
        } else {
            Strategy::Text
        }
    }

    /// Map a declared kind to a strategy; `auto` defers to inference
    pub fn for_kind(kind: UpdateKind, descriptor: &Descriptor) -> Strategy {
        match kind {
            UpdateKind::Auto => Strategy::infer(descriptor),
            UpdateKind::Text => Strategy::Text,
            UpdateKind::Placeholder => Strategy::Placeholder,
            UpdateKind::Image => Strategy::DeferredSource,
            UpdateKind::Href => Strategy::Href,
            UpdateKind::Meta => Strategy::MetaContent,
            UpdateKind::DataMessage => Strategy::DataMessage,
            UpdateKind::DataCopy => Strategy::DataCopy,
        }
    }

    /// Apply the mutation to an element.
    ///
    /// A declared kind can name a strategy the element has no slot for
    /// (a `placeholder` update on a `div`); that is a per-binding fault,
    /// reported without touching the element.
    pub fn apply(&self, el: &mut Element, value: &str) -> Result<(), WeftError> {
        match self {
            Strategy::Text => {
                el.set_text(value);
            }
            Strategy::Placeholder => {
                self.require_slot(el, matches!(el.tag(), "input" | "textarea"))?;
                el.set_attr(attr::PLACEHOLDER, value);
            }
            Strategy::DeferredSource => {
                self.require_slot(el, el.tag() == "img")?;
                el.set_attr(attr::DEFERRED_SRC, value);
            }
            Strategy::Href => {
                self.require_slot(el, matches!(el.tag(), "a" | "link" | "area"))?;
                el.set_attr(attr::HREF, value);
            }
            Strategy::MetaContent => {
                self.require_slot(el, el.tag() == "meta")?;
                el.set_attr(attr::CONTENT, value);
            }
            Strategy::DataMessage => {
                el.set_attr(attr::MESSAGE, value);
            }
            Strategy::DataCopy => {
                el.set_attr(attr::COPY, value);
            }
            Strategy::InputValue => {
                self.require_slot(el, matches!(el.tag(), "input" | "textarea"))?;
                el.set_attr(attr::VALUE, value);
            }
            Strategy::CopyAndText => {
                el.set_attr(attr::COPY, value);
                el.set_text(value);
            }
        }
        Ok(())
    }

    fn require_slot(&self, el: &Element, ok: bool) -> Result<(), WeftError> {
        if ok {
            Ok(())
        } else {
            Err(WeftError::Mutation {
                strategy: self.name(),
                detail: format!("element '{}' has no {} slot", el.tag(), self.name()),
            })
        }
    }
}

/// Render a resolved value for writing into an element.
///
/// Strings bind verbatim (no surrounding quotes); everything else binds
/// as its compact JSON form.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
