//! Declared update kinds
//!
//! The `data-update` attribute names one of these; a missing declaration
//! means [`UpdateKind::Auto`], which defers to shape inference at
//! apply-time.

use std::str::FromStr;

use crate::error::WeftError;

/// Declared update strategy for a binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateKind {
    /// Infer the strategy from the element's shape
    #[default]
    Auto,
    /// Replace the element's visible text content
    Text,
    /// Set the element's placeholder hint
    Placeholder,
    /// Set the deferred-load image source (never the immediate source)
    Image,
    /// Set the element's link target
    Href,
    /// Set the element's metadata content attribute
    Meta,
    /// Set the custom "message" data attribute
    DataMessage,
    /// Set the custom "copy" data attribute
    DataCopy,
}

impl UpdateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateKind::Auto => "auto",
            UpdateKind::Text => "text",
            UpdateKind::Placeholder => "placeholder",
            UpdateKind::Image => "image",
            UpdateKind::Href => "href",
            UpdateKind::Meta => "meta",
            UpdateKind::DataMessage => "data-message",
            UpdateKind::DataCopy => "data-copy",
        }
    }
}

impl FromStr for UpdateKind {
    type Err = WeftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(UpdateKind::Auto),
            "text" => Ok(UpdateKind::Text),
            "placeholder" => Ok(UpdateKind::Placeholder),
            "image" => Ok(UpdateKind::Image),
            "href" => Ok(UpdateKind::Href),
            "meta" => Ok(UpdateKind::Meta),
            "data-message" => Ok(UpdateKind::DataMessage),
            "data-copy" => Ok(UpdateKind::DataCopy),
            other => Err(WeftError::UnknownKind { kind: other.to_string() }),
        }
    }
}

impl std::fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
