use std::collections::HashSet;

use crate::dom::document::{Document, FrameDocument, NodeId};

/// Flattens every element reachable from `root` into one sequence: ordinary
/// descendants, attached shadow subtrees and accessible embedded documents,
/// recursing uniformly through both containment kinds at every level.
///
/// `root` itself is not included. With `root = None` the walk starts from the
/// top document. Denied (cross-origin) sub-documents are skipped without
/// failing the walk. Each reachable element appears exactly once.
pub fn collect_all(doc: &Document, root: Option<NodeId>) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut stack: Vec<NodeId> = Vec::new();

    match root {
        Some(id) => seed(&mut stack, &doc.node(id).children),
        None => seed(&mut stack, doc.roots()),
    }

    while let Some(id) = stack.pop() {
        if !seen.insert(id) {
            continue;
        }
        out.push(id);

        let node = doc.node(id);
        seed(&mut stack, &node.children);
        seed(&mut stack, &node.shadow_children);
        match &node.frame_document {
            Some(FrameDocument::Accessible(children)) => seed(&mut stack, children),
            // Cross-origin: nothing to read, never fatal.
            Some(FrameDocument::Denied) | None => {}
        }
    }

    out
}

/// Flattens ordinary descendants only, starting from the given scope
/// elements (included). Does not enter shadow subtrees or frames; this is
/// the query scope frame resolution works with.
pub fn collect_light(doc: &Document, scope: &[NodeId]) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut stack: Vec<NodeId> = Vec::new();
    seed(&mut stack, scope);

    while let Some(id) = stack.pop() {
        out.push(id);
        seed(&mut stack, &doc.node(id).children);
    }

    out
}

/// Elements of the top document that host a shadow subtree.
pub fn shadow_hosts(doc: &Document) -> Vec<NodeId> {
    collect_light(doc, doc.roots())
        .into_iter()
        .filter(|&id| !doc.node(id).shadow_children.is_empty())
        .collect()
}

// Reversed so the stack pops in document order.
fn seed(stack: &mut Vec<NodeId>, ids: &[NodeId]) {
    for &id in ids.iter().rev() {
        stack.push(id);
    }
}
