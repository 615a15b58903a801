use std::fmt;

#[derive(Debug)]
pub enum TagError {
    /// Snapshot records could not be serialized for export
    SnapshotSerialize { source: serde_json::Error },

    /// Config file content was not valid YAML
    ConfigParse { path: String, source: serde_yaml::Error },
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagError::SnapshotSerialize { source } => {
                write!(f, "Failed to serialize snapshot: {}", source)
            }
            TagError::ConfigParse { path, source } => {
                write!(f, "Invalid config '{}': {}", path, source)
            }
        }
    }
}

impl std::error::Error for TagError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TagError::SnapshotSerialize { source } => Some(source),
            TagError::ConfigParse { source, .. } => Some(source),
        }
    }
}
