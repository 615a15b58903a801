use crate::classify::category::ElementCategory;
use crate::config::OverlayConfig;
use crate::dom::attrs;
use crate::dom::document::{Document, NodeId};
use crate::dom::geometry::BoundingRect;
use crate::identity::label::{extract_frame_prefix, resolve_containing_frame, to_display_label};
use crate::walk::walker::collect_all;

/// Where the drawing collaborator must mount a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayAnchor {
    TopDocument,
    /// The frame-carrying element whose embedded document holds the target.
    Frame(NodeId),
}

/// Corner of the outline the display label sticks to. Cycled per marker so
/// labels of tightly packed elements do not pile onto the same corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelCorner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl LabelCorner {
    fn cycle(index: usize) -> Self {
        match index % 4 {
            0 => Self::TopLeft,
            1 => Self::TopRight,
            2 => Self::BottomLeft,
            _ => Self::BottomRight,
        }
    }
}

/// Everything the drawing collaborator needs for one marker. The renderer
/// decides *what* to draw; drawing itself lives outside this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayMarker {
    pub identity: String,
    pub label: String,
    pub category: ElementCategory,
    pub rect: BoundingRect,
    pub corner: LabelCorner,
    pub color: String,
    pub anchor: OverlayAnchor,
}

/// Drawing collaborator interface. `clear_markers` is expected to remove
/// markers everywhere they were mounted: top document, shadow subtrees and
/// accessible frames.
pub trait OverlaySurface {
    fn place_marker(&mut self, marker: OverlayMarker);
    fn clear_markers(&mut self);
}

/// Computes markers for every labeled, categorized, visible element and
/// hands them to the surface. Elements whose frame prefix cannot be resolved
/// to a frame host are dropped with a warning; one bad annotation never
/// aborts the overlay. Returns the number of markers placed.
pub fn add_overlay(doc: &Document, surface: &mut dyn OverlaySurface, config: &OverlayConfig) -> usize {
    let labeled: Vec<NodeId> = collect_all(doc, None)
        .into_iter()
        .filter(|&id| {
            doc.attribute(id, attrs::UNIQUE_ID)
                .is_some_and(|v| v != "*")
        })
        .collect();

    let mut placed = 0;
    for (index, id) in labeled.iter().copied().enumerate() {
        let identity = match doc.attribute(id, attrs::UNIQUE_ID) {
            Some(v) => v.to_string(),
            None => continue,
        };
        let category = match doc
            .attribute(id, attrs::ELEMENT_TYPE)
            .and_then(ElementCategory::from_attr)
        {
            Some(c) => c,
            None => continue,
        };
        if !is_visible_for_overlay(doc, id, config.min_visibility_ratio) {
            continue;
        }

        let anchor = match extract_frame_prefix(&identity) {
            Some(prefix) => match resolve_containing_frame(doc, prefix) {
                Some(frame) => OverlayAnchor::Frame(frame),
                None => {
                    eprintln!(
                        "Warning: no frame host matches prefix '{}' for '{}', dropping marker",
                        prefix, identity
                    );
                    continue;
                }
            },
            None => OverlayAnchor::TopDocument,
        };

        surface.place_marker(OverlayMarker {
            label: to_display_label(&identity),
            identity,
            category,
            rect: doc.node(id).rect,
            corner: LabelCorner::cycle(index),
            color: config.color.clone(),
            anchor,
        });
        placed += 1;
    }

    placed
}

/// Asks the surface to remove every mounted marker.
pub fn remove_overlay(surface: &mut dyn OverlaySurface) {
    surface.clear_markers();
}

/// Overlay visibility gate: style must not suppress the element, and the
/// instrumentation-reported viewport visibility ratio (when present) must
/// meet the threshold.
pub fn is_visible_for_overlay(doc: &Document, id: NodeId, min_ratio: f32) -> bool {
    let style = &doc.node(id).style;
    if style.display == "none" || style.visibility == "hidden" {
        return false;
    }
    match doc
        .attribute(id, attrs::VISIBILITY_RATIO)
        .and_then(|v| v.parse::<f32>().ok())
    {
        Some(ratio) => ratio >= min_ratio,
        None => true,
    }
}
