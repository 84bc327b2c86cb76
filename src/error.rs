//! Error types with fix suggestions

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// All error variants are part of the public API.
///
/// Every binding-level failure is contained at the scope of a single
/// resolution or a single element mutation; none of these abort a pass.
#[derive(Error, Debug)]
pub enum WeftError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document parse error: {0}")]
    DocumentParse(#[from] serde_yaml::Error),

    // ─────────────────────────────────────────────────────────────
    // Path errors (WEFT-010 to WEFT-011)
    // ─────────────────────────────────────────────────────────────

    #[error("WEFT-010: Invalid path expression: '{path}'")]
    PathParse { path: String },

    #[error("WEFT-011: Path '{path}' matched nothing in the data source")]
    PathNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // Data source errors (WEFT-020)
    // ─────────────────────────────────────────────────────────────

    #[error("WEFT-020: Data source was never loaded (or was null)")]
    MissingData,

    // ─────────────────────────────────────────────────────────────
    // Binding errors (WEFT-030 to WEFT-031)
    // ─────────────────────────────────────────────────────────────

    #[error("WEFT-030: Unknown update kind '{kind}'")]
    UnknownKind { kind: String },

    #[error("WEFT-031: Cannot apply {strategy} update: {detail}")]
    Mutation { strategy: &'static str, detail: String },
}

impl FixSuggestion for WeftError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            WeftError::Io(_) => Some("Check file path and permissions"),
            WeftError::DocumentParse(_) => Some("Check YAML syntax: indentation and quoting"),
            WeftError::PathParse { .. } => {
                Some("Use format: section.field or section.items[0].field")
            }
            WeftError::PathNotFound { .. } => {
                Some("Check the path exists in the data source (weft validate --data)")
            }
            WeftError::MissingData => {
                Some("Pass a data file with --data, and make sure it is not empty")
            }
            WeftError::UnknownKind { .. } => Some(
                "Use one of: auto, text, placeholder, image, href, meta, data-message, data-copy",
            ),
            WeftError::Mutation { .. } => {
                Some("Check the declared update kind matches the element's shape")
            }
        }
    }
}
