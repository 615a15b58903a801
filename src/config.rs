use serde::{Deserialize, Serialize};

use crate::error::TagError;

/// Optional YAML config file: `dom-tagger.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TaggerConfig {
    #[serde(default)]
    pub overlay: OverlayConfig,
    #[serde(default)]
    pub settle: SettleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Marker outline and label background color.
    #[serde(default = "default_color")]
    pub color: String,

    /// Elements with a reported viewport visibility ratio below this are
    /// not overlaid or exported.
    #[serde(default = "default_min_visibility")]
    pub min_visibility_ratio: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            color: "#000000".to_string(),
            min_visibility_ratio: 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettleConfig {
    /// Quiet window with no tree mutations before the tree counts as settled.
    #[serde(default = "default_quiet_ms")]
    pub quiet_ms: u64,

    /// Hard ceiling on waiting for the tree to settle.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            quiet_ms: 800,
            timeout_ms: 10_000,
        }
    }
}

// Serde default helpers
fn default_color() -> String { "#000000".to_string() }
fn default_min_visibility() -> f32 { 0.5 }
fn default_quiet_ms() -> u64 { 800 }
fn default_timeout_ms() -> u64 { 10_000 }

/// Load config from a YAML file. Returns defaults if the file is missing or
/// malformed.
pub fn load_config(path: Option<&str>) -> TaggerConfig {
    let config_path = path.unwrap_or("dom-tagger.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => TaggerConfig::default(),
    }
}

/// Strict variant for callers that want malformed config surfaced.
pub fn parse_config(path: &str, content: &str) -> Result<TaggerConfig, TagError> {
    serde_yaml::from_str(content).map_err(|source| TagError::ConfigParse {
        path: path.to_string(),
        source,
    })
}
