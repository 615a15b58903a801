//! Annotates a nested document tree (ordinary elements, shadow subtrees,
//! same-origin frames) so an automation controller can enumerate typable,
//! clickable and selectable elements through stable identities and verify
//! them visually through an overlay.
//!
//! The controller drives everything: it decides when to run a pass (usually
//! after [`settle::settle::MutationSettle`] reports a quiet tree), hands in
//! the document, and consumes the attributes written back onto it. Passes
//! are synchronous and must not be issued concurrently; the identity counter
//! is reconciled before minting within each assignment pass.

use crate::classify::classifier::classify;
use crate::config::TaggerConfig;
use crate::dom::attrs;
use crate::dom::document::{Document, NodeId};
use crate::error::TagError;
use crate::identity::assigner::{AssignedIdentity, IdentityAssigner};
use crate::overlay::renderer::{self, OverlaySurface};
use crate::overlay::snapshot::{self, Snapshot};
use crate::trace::{logger::TraceLogger, trace::TraceEvent};
use crate::walk::walker::collect_all;

pub mod classify;
pub mod config;
pub mod dom;
pub mod error;
pub mod identity;
pub mod overlay;
pub mod settle;
pub mod trace;
pub mod walk;

/// Document-session facade over the tagging passes. Owns the identity
/// counter for the session; construct one per page session and keep it
/// across passes so identities stay collision-free as the tree mutates.
pub struct Tagger {
    pub config: TaggerConfig,
    assigner: IdentityAssigner,
    tracer: Option<TraceLogger>,
}

impl Tagger {
    pub fn new(config: TaggerConfig) -> Self {
        Self {
            config,
            assigner: IdentityAssigner::new(),
            tracer: None,
        }
    }

    /// Appends one JSON line per pass to `trace_path`.
    pub fn with_trace(config: TaggerConfig, trace_path: &str) -> Self {
        Self {
            tracer: Some(TraceLogger::new(trace_path)),
            ..Self::new(config)
        }
    }

    /// The suffix the next minted identity will carry.
    pub fn next_id(&self) -> u64 {
        self.assigner.next_id()
    }

    /// Classifies every element reachable from `root` (the whole document
    /// when `None`) and writes the category attribute on each interactable
    /// one. Returns how many elements were tagged.
    pub fn run_classification(&self, doc: &mut Document, root: Option<NodeId>) -> usize {
        let elements = collect_all(doc, root);
        let mut tagged = 0;

        for &id in &elements {
            if let Some(category) = classify(doc, id) {
                doc.set_attribute(id, attrs::ELEMENT_TYPE, category.as_str());
                tagged += 1;
            }
        }

        if let Some(tracer) = &self.tracer {
            tracer.log(
                &TraceEvent::now("classify")
                    .with_elements_seen(elements.len())
                    .with_tagged(tagged),
            );
        }
        tagged
    }

    /// Reconciles the identity counter against identities already present
    /// under `root`, then mints identities for newly discovered typable and
    /// clickable elements. Idempotent on a static tree.
    pub fn run_id_assignment(&mut self, doc: &mut Document, root: Option<NodeId>) -> Vec<AssignedIdentity> {
        let assigned = self.assigner.run(doc, root);

        if let Some(tracer) = &self.tracer {
            let identities: Vec<String> =
                assigned.iter().map(|a| a.identity.clone()).collect();
            tracer.log(
                &TraceEvent::now("assign")
                    .with_assigned(&identities)
                    .with_next_id(self.assigner.next_id()),
            );
        }
        assigned
    }

    /// Hands a marker for every labeled, visible element to the drawing
    /// surface. Returns the number of markers placed.
    pub fn add_overlay(&self, doc: &Document, surface: &mut dyn OverlaySurface) -> usize {
        renderer::add_overlay(doc, surface, &self.config.overlay)
    }

    pub fn remove_overlay(&self, surface: &mut dyn OverlaySurface) {
        renderer::remove_overlay(surface);
    }

    /// Structured export of every visible interactable element plus
    /// viewport/device metadata.
    pub fn export_snapshot(&self, doc: &Document) -> Result<Snapshot, TagError> {
        snapshot::export_snapshot(doc, &self.config.overlay)
    }
}

impl Default for Tagger {
    fn default() -> Self {
        Self::new(TaggerConfig::default())
    }
}
