//! Pass outcomes
//!
//! Resolution and mutation both produce tagged results rather than
//! relying on log output as the only failure signal, so callers and tests
//! can assert on outcomes directly.

use crate::binding::Strategy;
use crate::error::WeftError;

/// Outcome of one binding: which element, which path, what happened
#[derive(Debug)]
pub struct BindingOutcome {
    /// Arena index of the bound element
    pub node: usize,
    /// The declared path string
    pub path: String,
    /// Applied strategy, or the contained per-binding failure
    pub result: Result<Strategy, WeftError>,
}

/// Accumulated results of one binding pass
#[derive(Debug, Default)]
pub struct PassReport {
    outcomes: Vec<BindingOutcome>,
    applied: usize,
    failed: usize,
}

impl PassReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: BindingOutcome) {
        match outcome.result {
            Ok(_) => self.applied += 1,
            Err(_) => self.failed += 1,
        }
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[BindingOutcome] {
        &self.outcomes
    }

    pub fn applied(&self) -> usize {
        self.applied
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }

    /// Failures only, for diagnostics
    pub fn failures(&self) -> impl Iterator<Item = &BindingOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }
}

impl std::fmt::Display for PassReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "binding pass complete: {} applied, {} failed",
            self.applied, self.failed
        )
    }
}
