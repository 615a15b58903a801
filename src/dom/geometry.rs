use serde::{Deserialize, Serialize};

/// Bounding client rect of one element, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundingRect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// A zero-size box, as produced for elements collapsed by layout.
    pub fn collapsed() -> Self {
        Self::default()
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Rendered area. Non-positive for collapsed or inverted boxes.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

/// Computed-style values the classifier reads. The host layout engine owns
/// these; the tagger never writes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedStyle {
    pub display: String,
    pub visibility: String,
    #[serde(rename = "pointerEvents")]
    pub pointer_events: String,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            display: "block".to_string(),
            visibility: "visible".to_string(),
            pointer_events: "auto".to_string(),
        }
    }
}

impl ComputedStyle {
    pub fn hidden() -> Self {
        Self {
            display: "none".to_string(),
            ..Self::default()
        }
    }
}

/// Viewport and device metadata attached to a document, exported with
/// snapshots so consumers can map boxes back to screen space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportInfo {
    pub width: f64,
    pub height: f64,
    #[serde(rename = "scrollX", default)]
    pub scroll_x: f64,
    #[serde(rename = "scrollY", default)]
    pub scroll_y: f64,
    #[serde(rename = "devicePixelRatio")]
    pub device_pixel_ratio: f64,
    pub screen: ScreenInfo,
}

impl Default for ViewportInfo {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            scroll_x: 0.0,
            scroll_y: 0.0,
            device_pixel_ratio: 1.0,
            screen: ScreenInfo::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenInfo {
    pub width: f64,
    pub height: f64,
    #[serde(rename = "availWidth")]
    pub avail_width: f64,
    #[serde(rename = "availHeight")]
    pub avail_height: f64,
}

impl Default for ScreenInfo {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            avail_width: 1280.0,
            avail_height: 775.0,
        }
    }
}
