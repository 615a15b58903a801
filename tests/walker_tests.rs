use dom_tagger::dom::document::Document;
use dom_tagger::walk::walker::{collect_all, collect_light, shadow_hosts};

use crate::common::utils::{body, elem};

mod common;

#[test]
fn collects_ordinary_descendants_in_document_order() {
    let mut doc = Document::new();
    let b = body(&mut doc);
    let div = elem(&mut doc, b, "div", &[]);
    let input = elem(&mut doc, div, "input", &[]);
    let button = elem(&mut doc, b, "button", &[]);

    let all = collect_all(&doc, None);
    assert_eq!(all, vec![b, div, input, button]);
}

#[test]
fn scoped_walk_excludes_the_root_itself() {
    let mut doc = Document::new();
    let b = body(&mut doc);
    let div = elem(&mut doc, b, "div", &[]);
    let inner = elem(&mut doc, div, "span", &[]);

    let scoped = collect_all(&doc, Some(div));
    assert_eq!(scoped, vec![inner], "Only descendants of the scan root");
}

#[test]
fn reaches_through_shadow_and_frame_nesting() {
    let mut doc = Document::new();
    let b = body(&mut doc);

    // body > host(shadow) > div > iframe > input
    let host = elem(&mut doc, b, "div", &[]);
    let shadow_div = doc.create("div");
    doc.attach_shadow(host, shadow_div);
    let iframe = doc.create("iframe");
    doc.append_child(shadow_div, iframe);
    let framed_input = doc.create("input");
    doc.attach_frame_child(iframe, framed_input);

    let all = collect_all(&doc, None);
    for (name, id) in [
        ("host", host),
        ("shadow child", shadow_div),
        ("iframe in shadow", iframe),
        ("input in nested frame", framed_input),
    ] {
        assert!(all.contains(&id), "Walk must reach the {}", name);
    }
}

#[test]
fn denied_frames_are_skipped_without_failing() {
    let mut doc = Document::new();
    let b = body(&mut doc);
    let blocked = elem(&mut doc, b, "iframe", &[]);
    doc.deny_frame(blocked);
    let open = elem(&mut doc, b, "iframe", &[]);
    let inner = doc.create("button");
    doc.attach_frame_child(open, inner);

    let all = collect_all(&doc, None);
    assert!(all.contains(&blocked), "The frame element itself is still walked");
    assert!(all.contains(&inner), "Accessible frame content is included");
    assert_eq!(all.len(), 4, "body, two iframes, one framed button");
}

#[test]
fn each_element_appears_exactly_once() {
    let mut doc = Document::new();
    let b = body(&mut doc);
    let div = elem(&mut doc, b, "div", &[]);
    let shared = elem(&mut doc, div, "span", &[]);
    // Host mutation can leave a node linked from two places; the visited
    // guard keeps the sequence duplicate-free.
    doc.append_child(b, shared);

    let all = collect_all(&doc, None);
    let hits = all.iter().filter(|&&id| id == shared).count();
    assert_eq!(hits, 1);
}

#[test]
fn light_walk_ignores_shadow_and_frames() {
    let mut doc = Document::new();
    let b = body(&mut doc);
    let host = elem(&mut doc, b, "div", &[]);
    let shadowed = doc.create("span");
    doc.attach_shadow(host, shadowed);
    let iframe = elem(&mut doc, b, "iframe", &[]);
    let framed = doc.create("input");
    doc.attach_frame_child(iframe, framed);

    let light = collect_light(&doc, doc.roots());
    assert!(light.contains(&host));
    assert!(light.contains(&iframe));
    assert!(!light.contains(&shadowed), "Shadow content is out of light scope");
    assert!(!light.contains(&framed), "Frame content is out of light scope");
}

#[test]
fn shadow_hosts_finds_top_level_hosts_only() {
    let mut doc = Document::new();
    let b = body(&mut doc);
    let host = elem(&mut doc, b, "div", &[]);
    let shadowed = doc.create("span");
    doc.attach_shadow(host, shadowed);
    elem(&mut doc, b, "div", &[]);

    assert_eq!(shadow_hosts(&doc), vec![host]);
}
