//! Minimal path-expression parser
//!
//! Supports:
//! - a.b.c (dot notation)
//! - a.items[0].b (single bracketed index per segment)
//!
//! Does NOT support:
//! - Wildcards: a.items[*]
//! - Slices: a.items[0:5]
//! - Quoted keys: a["b c"]

use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::error::WeftError;

/// A parsed path segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Mapping-key access: .field
    Key(String),
    /// Sequence-index access: [0]
    Index(usize),
}

/// A path expression parsed ahead of evaluation.
///
/// A source segment `chapters[2]` decomposes into `Key("chapters")`
/// followed by `Index(2)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpr {
    source: String,
    segments: Vec<Segment>,
}

/// Segment grammar: identifier with at most one bracketed index
static SEGMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)(?:\[(\d+)\])?$").unwrap());

/// Cache of parsed path expressions (path strings repeat across elements)
static PATH_CACHE: Lazy<DashMap<String, Arc<PathExpr>>> = Lazy::new(DashMap::new);

/// Parse a path string into typed segments
///
/// Examples:
/// - "couple.groom.name" → [Key("couple"), Key("groom"), Key("name")]
/// - "story.chapters[0].title" → [Key("story"), Index(0), Key("title")]
pub fn parse(path: &str) -> Result<PathExpr, WeftError> {
    if path.is_empty() {
        return Err(WeftError::PathParse { path: path.to_string() });
    }

    let mut segments = Vec::new();

    for part in path.split('.') {
        let caps = SEGMENT_RE.captures(part).ok_or_else(|| WeftError::PathParse {
            path: path.to_string(),
        })?;

        segments.push(Segment::Key(caps[1].to_string()));

        if let Some(index) = caps.get(2) {
            let index: usize =
                index.as_str().parse().map_err(|_| WeftError::PathParse {
                    path: path.to_string(),
                })?;
            segments.push(Segment::Index(index));
        }
    }

    Ok(PathExpr {
        source: path.to_string(),
        segments,
    })
}

/// Parse with caching. Parse failures are not cached.
pub fn parse_cached(path: &str) -> Result<Arc<PathExpr>, WeftError> {
    if let Some(cached) = PATH_CACHE.get(path) {
        return Ok(Arc::clone(&cached));
    }

    let expr = Arc::new(parse(path)?);
    PATH_CACHE.insert(path.to_string(), Arc::clone(&expr));
    Ok(expr)
}

impl PathExpr {
    /// The original path string, for diagnostics
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Evaluate the path against a data root, left to right.
    ///
    /// Returns `None` the moment any intermediate value is absent, null,
    /// or of the wrong shape (keying into a non-mapping, indexing into a
    /// non-sequence). A null final value also counts as not found.
    pub fn lookup<'v>(&self, root: &'v Value) -> Option<&'v Value> {
        let mut current = root;

        for segment in &self.segments {
            if current.is_null() {
                return None;
            }
            current = match segment {
                Segment::Key(key) => current.get(key)?,
                Segment::Index(idx) => current.as_array()?.get(*idx)?,
            };
        }

        if current.is_null() {
            None
        } else {
            Some(current)
        }
    }
}

impl std::fmt::Display for PathExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}
