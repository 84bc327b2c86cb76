//! Load-once data store
//!
//! Holds the nested data object for the lifetime of the process. The root
//! is supplied exactly once via [`DataStore::load`] and never mutated
//! afterward; every read clones values out, so no caller can reach into
//! the stored root.

use serde_json::Value;

use crate::error::WeftError;
use crate::path;

/// Read-only holder for the loaded data object.
///
/// A store built from a missing or null source is still usable: every
/// resolution reports [`WeftError::MissingData`] instead of panicking, so
/// the host keeps running with its original markup.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    root: Option<Value>,
}

impl DataStore {
    /// Create an empty store (counts as a missing data source)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an externally supplied data object.
    ///
    /// `None` and `Value::Null` both record a load failure; the condition
    /// is logged once here rather than on every resolution.
    pub fn load(source: Option<Value>) -> Self {
        match source {
            Some(root) if !root.is_null() => {
                tracing::debug!("data source loaded");
                Self { root: Some(root) }
            }
            _ => {
                tracing::error!("data source not found; all resolutions will fail");
                Self { root: None }
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.root.is_some()
    }

    /// Resolve a path expression against the stored root.
    ///
    /// Returns a tagged outcome: the cloned value on success, otherwise
    /// which of missing-source / malformed-path / path-not-found applied.
    pub fn resolve(&self, path: &str) -> Result<Value, WeftError> {
        let root = self.root.as_ref().ok_or(WeftError::MissingData)?;
        let expr = path::parse_cached(path)?;

        expr.lookup(root)
            .cloned()
            .ok_or_else(|| WeftError::PathNotFound { path: path.to_string() })
    }

    /// The whole stored object, for bulk or diagnostic consumers
    pub fn root(&self) -> Option<&Value> {
        self.root.as_ref()
    }
}
