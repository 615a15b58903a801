use serde::Serialize;
use sha1::{Digest, Sha1};

use crate::classify::category::ElementCategory;
use crate::config::OverlayConfig;
use crate::dom::attrs;
use crate::dom::document::Document;
use crate::dom::geometry::ViewportInfo;
use crate::error::TagError;
use crate::overlay::renderer::is_visible_for_overlay;
use crate::walk::walker::collect_all;

/// Structured export of every visible interactable element, for consumption
/// outside the page: one record per element plus the viewport and device
/// metadata needed to map boxes back to screen space.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub viewport: ViewportInfo,
    pub elements: Vec<SnapshotElement>,
    /// SHA-1 over the serialized records. Two snapshots of an unchanged
    /// tree share a digest, so callers can skip re-processing.
    pub digest: String,
}

/// Bounding box is absolute (scroll offsets applied), not viewport-relative.
#[derive(Debug, Serialize)]
pub struct SnapshotElement {
    pub identity: String,
    pub category: ElementCategory,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

pub fn export_snapshot(doc: &Document, config: &OverlayConfig) -> Result<Snapshot, TagError> {
    let mut elements = Vec::new();

    for id in collect_all(doc, None) {
        let identity = match doc.attribute(id, attrs::UNIQUE_ID) {
            Some(v) if v != "*" => v.to_string(),
            _ => continue,
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

        let rect = doc.node(id).rect;
        elements.push(SnapshotElement {
            identity,
            category,
            left: rect.left + doc.viewport.scroll_x,
            top: rect.top + doc.viewport.scroll_y,
            width: rect.width(),
            height: rect.height(),
        });
    }

    let serialized = serde_json::to_string(&elements)
        .map_err(|source| TagError::SnapshotSerialize { source })?;
    let mut hasher = Sha1::new();
    hasher.update(serialized.as_bytes());
    let digest = format!("{:x}", hasher.finalize());

    Ok(Snapshot {
        viewport: doc.viewport.clone(),
        elements,
        digest,
    })
}
