#![allow(dead_code)]

use dom_tagger::dom::document::{Document, NodeId};

/// Adds a `body` root to the document and returns its handle.
pub fn body(doc: &mut Document) -> NodeId {
    let id = doc.create("body");
    doc.append_root(id);
    id
}

/// Creates a child element with the given attributes already set.
pub fn elem(doc: &mut Document, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
    let id = doc.create(tag);
    for (name, value) in attrs {
        doc.set_attribute(id, name, value);
    }
    doc.append_child(parent, id);
    id
}
