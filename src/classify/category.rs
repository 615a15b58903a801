use serde::Serialize;

/// The three coarse interaction categories. An element that fits none of
/// them simply gets no category (`Option::None` at the classifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementCategory {
    Typable,
    Clickable,
    Selectable,
}

impl ElementCategory {
    /// Value written to the category attribute, and the identity kind prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Typable => "typable",
            Self::Clickable => "clickable",
            Self::Selectable => "selectable",
        }
    }

    /// Short prefix used in display labels: `te-3`, `ce-17`, `se-9`.
    pub fn label_prefix(self) -> &'static str {
        match self {
            Self::Typable => "te",
            Self::Clickable => "ce",
            Self::Selectable => "se",
        }
    }

    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "typable" => Some(Self::Typable),
            "clickable" => Some(Self::Clickable),
            "selectable" => Some(Self::Selectable),
            _ => None,
        }
    }
}

impl std::fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
