use crate::classify::category::ElementCategory;
use crate::classify::classifier::classify;
use crate::dom::attrs;
use crate::dom::document::{Document, NodeId};
use crate::walk::walker::collect_all;

/// One identity minted during an assignment pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignedIdentity {
    pub node: NodeId,
    pub identity: String,
    pub category: ElementCategory,
}

/// Holds the session-wide identity counter. Construct one per document
/// session and reuse it for every pass; the counter only ever moves forward,
/// so identities minted in later passes never collide with earlier ones.
#[derive(Debug, Default)]
pub struct IdentityAssigner {
    next_id: u64,
}

impl IdentityAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// The suffix the next minted identity will carry.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Advances the counter past the largest numeric suffix already present
    /// in the tree, so that dynamically loaded content labeled by an earlier
    /// pass can never be collided with. Malformed suffixes are ignored for
    /// counting and left on their elements untouched.
    pub fn reconcile_counter(&mut self, doc: &Document, root: Option<NodeId>) {
        for id in collect_all(doc, root) {
            if let Some(identity) = doc.attribute(id, attrs::UNIQUE_ID) {
                if let Some(n) = numeric_suffix(identity) {
                    self.next_id = self.next_id.max(n + 1);
                }
            }
        }
    }

    /// Mints `<kind>-element-<n>` for every typable or clickable element
    /// that does not already carry an identity. Selectable elements are
    /// tagged with a category only; their contained controls carry the
    /// identities. Re-running on a static tree is a no-op.
    pub fn assign_missing(&mut self, doc: &mut Document, root: Option<NodeId>) -> Vec<AssignedIdentity> {
        let mut assigned = Vec::new();

        for id in collect_all(doc, root) {
            if doc.has_attribute(id, attrs::UNIQUE_ID) {
                continue;
            }
            let category = match classify(doc, id) {
                Some(c @ (ElementCategory::Typable | ElementCategory::Clickable)) => c,
                _ => continue,
            };

            let identity = format!("{}-element-{}", category.as_str(), self.next_id);
            self.next_id += 1;
            doc.set_attribute(id, attrs::UNIQUE_ID, &identity);
            assigned.push(AssignedIdentity {
                node: id,
                identity,
                category,
            });
        }

        assigned
    }

    /// The two halves of a pass, always in this order: reconcile, then mint.
    pub fn run(&mut self, doc: &mut Document, root: Option<NodeId>) -> Vec<AssignedIdentity> {
        self.reconcile_counter(doc, root);
        self.assign_missing(doc, root)
    }
}

fn numeric_suffix(identity: &str) -> Option<u64> {
    identity.rsplit('-').next().and_then(|s| s.parse().ok())
}
