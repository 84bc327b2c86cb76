//! Weft - declarative data-binding engine for annotated document trees
//!
//! Given a nested data object and a document whose elements declare
//! lookup paths, weft resolves each path and writes the value into the
//! element with a type-appropriate update strategy. Resolution happens
//! once, at initialization; there is no reactivity and no write-back.

pub mod binding;
pub mod document;
pub mod error;
pub mod path;
pub mod store;

pub use binding::{BindingEngine, BindingOutcome, PassReport, Strategy, UpdateKind};
pub use document::{Document, Element};
pub use error::{FixSuggestion, WeftError};
pub use path::{PathExpr, Segment};
pub use store::DataStore;
