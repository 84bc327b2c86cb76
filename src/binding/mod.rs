//! Binding Module - writes resolved data values into document elements
//!
//! Handles the declarative binding system:
//! - `kind`: declared update kinds (`data-update` attribute values)
//! - `strategy`: element capability descriptors and mutation strategies
//! - `engine`: the single synchronous binding pass
//! - `report`: per-binding outcomes and pass totals
//!
//! Data flow:
//! ```text
//! data-bind attribute → path resolution (DataStore)
//!                              ↓
//!                  declared kind or auto-inference
//!                              ↓
//!                      mutation Strategy
//!                              ↓
//!                  element updated in place
//! ```

mod engine;
mod kind;
mod report;
mod strategy;

// Re-export public types
pub use engine::BindingEngine;
pub use kind::UpdateKind;
pub use report::{BindingOutcome, PassReport};
pub use strategy::{render_value, Descriptor, Strategy};
