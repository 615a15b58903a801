use dom_tagger::Tagger;
use dom_tagger::classify::category::ElementCategory;
use dom_tagger::dom::attrs;
use dom_tagger::dom::document::Document;
use dom_tagger::overlay::renderer::{OverlayMarker, OverlaySurface};

use crate::common::utils::{body, elem};

mod common;

#[derive(Default)]
struct RecordingSurface {
    markers: Vec<OverlayMarker>,
}

impl OverlaySurface for RecordingSurface {
    fn place_marker(&mut self, marker: OverlayMarker) {
        self.markers.push(marker);
    }

    fn clear_markers(&mut self) {
        self.markers.clear();
    }
}

/// Top document holding a shadow host whose subtree sits next to an
/// accessible frame, so one walk crosses every containment kind.
fn nested_document(doc: &mut Document) -> (dom_tagger::dom::document::NodeId, dom_tagger::dom::document::NodeId, dom_tagger::dom::document::NodeId) {
    let b = body(doc);
    let top_input = elem(doc, b, "input", &[("type", "text")]);

    let host = elem(doc, b, "div", &[]);
    let shadow_button = doc.create("button");
    doc.attach_shadow(host, shadow_button);

    let iframe = doc.create("iframe");
    doc.append_child(host, iframe);
    let framed_input = doc.create("input");
    doc.set_attribute(framed_input, "type", "email");
    doc.attach_frame_child(iframe, framed_input);

    (top_input, shadow_button, framed_input)
}

#[test]
fn full_pass_tags_and_labels_across_all_containment_levels() {
    let mut doc = Document::new();
    let (top_input, shadow_button, framed_input) = nested_document(&mut doc);

    let mut tagger = Tagger::default();
    let tagged = tagger.run_classification(&mut doc, None);
    let assigned = tagger.run_id_assignment(&mut doc, None);

    assert_eq!(tagged, 3, "Both inputs and the shadow button are interactable");
    assert_eq!(assigned.len(), 3);

    assert_eq!(doc.attribute(top_input, attrs::ELEMENT_TYPE), Some("typable"));
    assert_eq!(doc.attribute(shadow_button, attrs::ELEMENT_TYPE), Some("clickable"));
    assert_eq!(doc.attribute(framed_input, attrs::ELEMENT_TYPE), Some("typable"));

    for id in [top_input, shadow_button, framed_input] {
        assert!(
            doc.attribute(id, attrs::UNIQUE_ID).is_some(),
            "Every interactable element carries an identity"
        );
    }
}

#[test]
fn repeated_passes_only_label_what_is_new() {
    let mut doc = Document::new();
    let b = body(&mut doc);
    elem(&mut doc, b, "input", &[("type", "text")]);
    elem(&mut doc, b, "button", &[]);

    let mut tagger = Tagger::default();
    tagger.run_classification(&mut doc, None);
    let first = tagger.run_id_assignment(&mut doc, None);
    assert_eq!(first.len(), 2);

    // Dynamic content shows up between passes.
    let late_button = elem(&mut doc, b, "button", &[]);
    tagger.run_classification(&mut doc, None);
    let second = tagger.run_id_assignment(&mut doc, None);

    assert_eq!(second.len(), 1);
    assert_eq!(second[0].node, late_button);
    assert_eq!(second[0].identity, "clickable-element-2");
}

#[test]
fn session_counter_survives_even_if_annotations_are_stripped() {
    let mut doc = Document::new();
    let b = body(&mut doc);
    let button = elem(&mut doc, b, "button", &[]);

    let mut tagger = Tagger::default();
    tagger.run_id_assignment(&mut doc, None);
    assert_eq!(doc.attribute(button, attrs::UNIQUE_ID), Some("clickable-element-0"));

    // Host mutation wipes the attribute; the session counter still refuses
    // to reuse the suffix.
    doc.remove_attribute(button, attrs::UNIQUE_ID);
    let relabeled = tagger.run_id_assignment(&mut doc, None);
    assert_eq!(relabeled[0].identity, "clickable-element-1");
}

#[test]
fn overlay_and_snapshot_agree_on_what_is_interactable() {
    let mut doc = Document::new();
    nested_document(&mut doc);

    let mut tagger = Tagger::default();
    tagger.run_classification(&mut doc, None);
    tagger.run_id_assignment(&mut doc, None);

    let mut surface = RecordingSurface::default();
    let placed = tagger.add_overlay(&doc, &mut surface);
    let snapshot = tagger.export_snapshot(&doc).expect("snapshot export");

    assert_eq!(placed, 3);
    assert_eq!(snapshot.elements.len(), 3);

    let overlay_ids: Vec<&str> = surface.markers.iter().map(|m| m.identity.as_str()).collect();
    let snapshot_ids: Vec<&str> = snapshot.elements.iter().map(|e| e.identity.as_str()).collect();
    assert_eq!(overlay_ids, snapshot_ids);

    assert!(
        snapshot
            .elements
            .iter()
            .any(|e| e.category == ElementCategory::Typable),
        "Typable elements show up in the export"
    );
}

#[test]
fn classification_is_recomputed_every_pass() {
    let mut doc = Document::new();
    let b = body(&mut doc);
    let div = elem(&mut doc, b, "div", &[]);

    let tagger = Tagger::default();
    assert_eq!(tagger.run_classification(&mut doc, None), 0);

    // The instrumentation collaborator later observes a click listener.
    doc.set_attribute(div, attrs::HAS_CLICK_LISTENER, "1");
    assert_eq!(tagger.run_classification(&mut doc, None), 1);
    assert_eq!(doc.attribute(div, attrs::ELEMENT_TYPE), Some("clickable"));
}
