use std::collections::BTreeMap;

use crate::dom::geometry::{BoundingRect, ComputedStyle, ViewportInfo};

/// Stable handle to one node in a [`Document`] arena. Handles stay valid for
/// the lifetime of the document; the tagger keys all of its annotations on
/// them instead of owning any node state itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Result of reading a frame-carrying element's embedded document.
///
/// Cross-origin denial is a value, not an error: the walker branches on it
/// and moves on.
#[derive(Debug, Clone)]
pub enum FrameDocument {
    /// Same-origin document; its top-level elements are listed.
    Accessible(Vec<NodeId>),
    /// Cross-origin; contents can never be read.
    Denied,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub style: ComputedStyle,
    pub rect: BoundingRect,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Roots of an attached shadow subtree, if any.
    pub shadow_children: Vec<NodeId>,
    /// Present only on frame-carrying elements.
    pub frame_document: Option<FrameDocument>,
}

/// In-memory stand-in for the host document tree.
///
/// The host environment owns element lifetime, layout and style; this arena
/// only mirrors what the tagger consumes (structure, style, geometry,
/// attributes) and accepts the two annotation attributes it writes back.
/// Newly created nodes get a nominal laid-out box; model collapsed layout
/// with [`Document::set_rect`].
#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
    pub viewport: ViewportInfo,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewport(viewport: ViewportInfo) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Creates a detached node. Attach it with [`Document::append_root`],
    /// [`Document::append_child`], [`Document::attach_shadow`] or
    /// [`Document::attach_frame_child`].
    pub fn create(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            tag: tag.to_string(),
            attributes: BTreeMap::new(),
            style: ComputedStyle::default(),
            rect: BoundingRect::new(0.0, 0.0, 100.0, 20.0),
            parent: None,
            children: Vec::new(),
            shadow_children: Vec::new(),
            frame_document: None,
        });
        id
    }

    pub fn append_root(&mut self, id: NodeId) {
        self.roots.push(id);
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Attaches `child` as a root of `host`'s shadow subtree. Shadow roots
    /// sit outside the ordinary parent chain, so `child.parent` stays unset.
    pub fn attach_shadow(&mut self, host: NodeId, child: NodeId) {
        self.nodes[host.0].shadow_children.push(child);
    }

    /// Attaches `child` as a top-level element of `host`'s embedded
    /// same-origin document, making `host` a frame-carrying element.
    pub fn attach_frame_child(&mut self, host: NodeId, child: NodeId) {
        match &mut self.nodes[host.0].frame_document {
            Some(FrameDocument::Accessible(children)) => children.push(child),
            slot => *slot = Some(FrameDocument::Accessible(vec![child])),
        }
    }

    /// Marks `host` as a frame whose embedded document is cross-origin.
    pub fn deny_frame(&mut self, host: NodeId) {
        self.nodes[host.0].frame_document = Some(FrameDocument::Denied);
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn tag(&self, id: NodeId) -> &str {
        &self.nodes[id.0].tag
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes[id.0].attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.nodes[id.0].attributes.contains_key(name)
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        self.nodes[id.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) {
        self.nodes[id.0].attributes.remove(name);
    }

    pub fn set_style(&mut self, id: NodeId, style: ComputedStyle) {
        self.nodes[id.0].style = style;
    }

    pub fn set_rect(&mut self, id: NodeId, rect: BoundingRect) {
        self.nodes[id.0].rect = rect;
    }
}
