use crate::classify::category::ElementCategory;
use crate::dom::attrs;
use crate::dom::document::{Document, NodeId};
use crate::walk::walker::{collect_all, collect_light};

const TYPABLE_INPUT_TYPES: &[&str] = &[
    "text", "textarea", "password", "email", "number", "search", "url", "tel",
];

const CLICKABLE_INPUT_TYPES: &[&str] = &[
    "submit", "button", "reset", "checkbox", "radio", "color", "range",
];

const CLICKABLE_ARIA_ROLES: &[&str] = &[
    "button", "link", "menuitem", "tab", "switch", "option", "radio",
];

const CLICKABLE_TAGS: &[&str] = &["a", "button", "select", "summary", "option"];

const CLICK_EVENT_ATTRIBUTES: &[&str] = &["onclick", "ondblclick", "onmousedown"];

/// Typable controls must render at least this many square units; anything
/// smaller is a zero-size or tracking control, not something to type into.
const MIN_TYPABLE_AREA: f64 = 1.0;

/// Assigns at most one category, in priority order typable > clickable >
/// selectable. Pure function of the element and its read-only oracles;
/// nothing is cached between passes.
pub fn classify(doc: &Document, id: NodeId) -> Option<ElementCategory> {
    if is_typable(doc, id) {
        Some(ElementCategory::Typable)
    } else if is_clickable(doc, id) {
        Some(ElementCategory::Clickable)
    } else if is_selectable(doc, id) {
        Some(ElementCategory::Selectable)
    } else {
        None
    }
}

/// Text-area-like controls, textual inputs and live contenteditable hosts,
/// provided they render larger than [`MIN_TYPABLE_AREA`].
pub fn is_typable(doc: &Document, id: NodeId) -> bool {
    let node = doc.node(id);
    if node.rect.area() <= MIN_TYPABLE_AREA {
        return false;
    }

    if node.tag == "textarea" {
        return true;
    }
    if node.tag == "input" {
        // Inputs without an explicit type render as text fields.
        let input_type = doc.attribute(id, "type").unwrap_or("text");
        if TYPABLE_INPUT_TYPES.contains(&input_type) {
            return true;
        }
    }
    doc.attribute(id, "contenteditable") == Some("true")
}

/// False when the computed style suppresses the element (display, visibility
/// or pointer interaction) or it carries a `disabled` attribute.
pub fn is_available(doc: &Document, id: NodeId) -> bool {
    let node = doc.node(id);
    !(node.style.display == "none"
        || node.style.visibility == "hidden"
        || node.style.pointer_events == "none"
        || doc.has_attribute(id, "disabled"))
}

pub fn is_clickable(doc: &Document, id: NodeId) -> bool {
    if !is_available(doc, id) || is_option_within_select(doc, id) || is_selectable(doc, id) {
        return false;
    }
    // Collapsed by layout: never clickable, whatever the attributes claim.
    if doc.node(id).rect.area() <= 0.0 {
        return false;
    }

    has_click_listener_marker(doc, id)
        || is_common_interactive_tag(doc, id)
        || has_click_event_attribute(doc, id)
        || has_clickable_role(doc, id)
        || is_clickable_input(doc, id)
        || is_focusable(doc, id)
        || is_label_for_control(doc, id)
}

/// Native selects (unless disabled), inputs bound to a datalist, and the
/// common ul > li > a custom-dropdown pattern.
pub fn is_selectable(doc: &Document, id: NodeId) -> bool {
    let node = doc.node(id);
    match node.tag.as_str() {
        "select" => !doc.has_attribute(id, "disabled"),
        "input" => match doc.attribute(id, "list") {
            Some(list_id) if !list_id.is_empty() => resolves_to_datalist(doc, list_id),
            _ => false,
        },
        "ul" => has_link_bearing_item(doc, id),
        _ => false,
    }
}

fn has_click_listener_marker(doc: &Document, id: NodeId) -> bool {
    doc.has_attribute(id, attrs::HAS_CLICK_LISTENER)
}

fn is_common_interactive_tag(doc: &Document, id: NodeId) -> bool {
    CLICKABLE_TAGS.contains(&doc.tag(id))
}

fn has_click_event_attribute(doc: &Document, id: NodeId) -> bool {
    CLICK_EVENT_ATTRIBUTES
        .iter()
        .any(|attr| doc.has_attribute(id, attr))
}

fn has_clickable_role(doc: &Document, id: NodeId) -> bool {
    let role = doc.attribute(id, "role").unwrap_or("");
    CLICKABLE_ARIA_ROLES.contains(&role)
}

fn is_clickable_input(doc: &Document, id: NodeId) -> bool {
    doc.tag(id) == "input"
        && doc
            .attribute(id, "type")
            .is_some_and(|t| CLICKABLE_INPUT_TYPES.contains(&t))
}

fn is_focusable(doc: &Document, id: NodeId) -> bool {
    doc.attribute(id, "tabindex").is_some_and(|t| !t.is_empty())
}

/// Options directly under a select are reached through the parent control.
fn is_option_within_select(doc: &Document, id: NodeId) -> bool {
    doc.tag(id) == "option"
        && doc
            .node(id)
            .parent
            .is_some_and(|parent| doc.tag(parent) == "select")
}

/// A label counts as clickable only when its `for` reference resolves to a
/// real control somewhere in the flattened tree, including shadow subtrees
/// and accessible embedded documents.
fn is_label_for_control(doc: &Document, id: NodeId) -> bool {
    if doc.tag(id) != "label" {
        return false;
    }
    let target = match doc.attribute(id, "for") {
        Some(t) if !t.is_empty() => t,
        _ => return false,
    };
    collect_all(doc, None).into_iter().any(|candidate| {
        doc.attribute(candidate, "id") == Some(target)
            && matches!(doc.tag(candidate), "input" | "textarea" | "select" | "button")
    })
}

fn resolves_to_datalist(doc: &Document, list_id: &str) -> bool {
    collect_all(doc, None)
        .into_iter()
        .any(|candidate| {
            doc.attribute(candidate, "id") == Some(list_id) && doc.tag(candidate) == "datalist"
        })
}

fn has_link_bearing_item(doc: &Document, id: NodeId) -> bool {
    doc.node(id).children.iter().any(|&item| {
        doc.tag(item) == "li"
            && collect_light(doc, &[item])
                .into_iter()
                .any(|desc| doc.tag(desc) == "a")
    })
}
