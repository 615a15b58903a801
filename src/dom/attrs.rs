//! Attribute names the tagger reads and writes on host elements.

/// Persistent identity of an interactable element, e.g. `clickable-element-17`.
pub const UNIQUE_ID: &str = "data-tag-unique-id";

/// Category tag: `typable`, `clickable` or `selectable`.
pub const ELEMENT_TYPE: &str = "data-tag-element-type";

/// Set by the listener-instrumentation collaborator when a click-style
/// event listener was observed on the element. Read-only here.
pub const HAS_CLICK_LISTENER: &str = "data-tag-has-click-listener";

/// Fraction of the element currently inside the viewport, written by
/// external instrumentation. Read-only here.
pub const VISIBILITY_RATIO: &str = "data-tag-visibility-ratio";
