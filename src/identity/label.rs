use crate::dom::attrs;
use crate::dom::document::{Document, NodeId};
use crate::walk::walker::{collect_light, shadow_hosts};

const LABEL_FORMS: &[(&str, &str)] = &[
    ("clickable-element-", "ce-"),
    ("typable-element-", "te-"),
    ("selectable-element-", "se-"),
];

/// Short display form of an identity: `clickable-element-17` becomes
/// `ce-17`. Identities with no known kind prefix pass through unchanged.
pub fn to_display_label(identity: &str) -> String {
    for (full, short) in LABEL_FORMS {
        if let Some(suffix) = identity.strip_prefix(full) {
            return format!("{short}{suffix}");
        }
    }
    identity.to_string()
}

/// The character immediately preceding the first digit run that follows a
/// hyphen. Plain identities like `clickable-element-17` carry no such
/// character; identities minted inside a nested frame do, and it names the
/// frame host the overlay must anchor to.
pub fn extract_frame_prefix(identity: &str) -> Option<char> {
    let chars: Vec<char> = identity.chars().collect();
    chars.windows(3).find_map(|w| {
        if w[0] == '-' && !w[1].is_ascii_digit() && w[2].is_ascii_digit() {
            Some(w[1])
        } else {
            None
        }
    })
}

/// Finds the frame-carrying element whose identity attribute matches the
/// frame prefix: first in the top document, then inside each top-level
/// shadow host's subtree. Returns the first match.
pub fn resolve_containing_frame(doc: &Document, prefix: char) -> Option<NodeId> {
    let wanted = prefix.to_string();

    let top = collect_light(doc, doc.roots());
    if let Some(found) = find_frame(doc, &top, &wanted) {
        return Some(found);
    }

    for host in shadow_hosts(doc) {
        let subtree = collect_light(doc, &doc.node(host).shadow_children);
        if let Some(found) = find_frame(doc, &subtree, &wanted) {
            return Some(found);
        }
    }

    None
}

fn find_frame(doc: &Document, scope: &[NodeId], wanted: &str) -> Option<NodeId> {
    scope.iter().copied().find(|&id| {
        doc.node(id).frame_document.is_some() && doc.attribute(id, attrs::UNIQUE_ID) == Some(wanted)
    })
}
