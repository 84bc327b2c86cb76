//! The binding pass
//!
//! A single synchronous walk over the document in discovery order. Each
//! element carrying a path declaration is resolved and mutated
//! independently; one bad binding never aborts the pass, and elements
//! whose bindings fail keep their original markup.

use tracing::{debug, info, warn};

use crate::binding::{render_value, BindingOutcome, Descriptor, PassReport, Strategy, UpdateKind};
use crate::document::{attr, Document};
use crate::error::WeftError;
use crate::store::DataStore;

/// Data field stamped onto the document root for the countdown collaborator
const SCHEDULE_PATH: &str = "event.countdownDatetime";

/// Applies a loaded [`DataStore`] to an annotated [`Document`].
///
/// The store must be loaded before the pass runs; an unloaded store
/// degrades to a no-op pass where every binding reports missing data.
pub struct BindingEngine<'a> {
    store: &'a DataStore,
}

impl<'a> BindingEngine<'a> {
    pub fn new(store: &'a DataStore) -> Self {
        Self { store }
    }

    /// Run one binding pass over the document.
    ///
    /// Visits every annotated element exactly once, in discovery order.
    /// Always runs to completion; partial failure is reported through the
    /// returned [`PassReport`], never raised.
    pub fn apply(&self, doc: &mut Document) -> PassReport {
        self.stamp_schedule(doc);

        let mut report = PassReport::new();

        for idx in doc.pre_order() {
            let Some(path) = doc.node(idx).attr(attr::BIND).map(str::to_owned) else {
                continue;
            };

            let result = self.bind_one(doc, idx, &path);
            if let Err(e) = &result {
                warn!(path = %path, node = idx, "binding failed: {e}");
            }
            report.push(BindingOutcome { node: idx, path, result });
        }

        info!(applied = report.applied(), failed = report.failed(), "{report}");
        report
    }

    fn bind_one(
        &self,
        doc: &mut Document,
        idx: usize,
        path: &str,
    ) -> Result<Strategy, WeftError> {
        let kind = match doc.node(idx).attr(attr::UPDATE) {
            Some(raw) => raw.parse::<UpdateKind>()?,
            None => UpdateKind::Auto,
        };

        let value = self.store.resolve(path)?;
        let rendered = render_value(&value);

        let descriptor = Descriptor::of(doc, idx);
        let strategy = Strategy::for_kind(kind, &descriptor);
        strategy.apply(doc.node_mut(idx), &rendered)?;

        debug!(path = %path, strategy = strategy.name(), "binding applied");
        Ok(strategy)
    }

    /// Stamp the event schedule onto the document root, when present.
    ///
    /// The countdown collaborator reads this marker; it is a host
    /// contract, not a binding, so it does not appear in the report.
    fn stamp_schedule(&self, doc: &mut Document) {
        let Ok(value) = self.store.resolve(SCHEDULE_PATH) else {
            return;
        };
        if let Some(&root) = doc.roots().first() {
            let rendered = render_value(&value);
            debug!(datetime = %rendered, "schedule marker set");
            doc.node_mut(root).set_attr(attr::TIME, rendered);
        }
    }
}
