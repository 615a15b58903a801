use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// One line of the pass trace: what a classification or assignment pass saw
/// and produced. Serialized as JSON lines by the logger.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub pass: String,

    pub elements_seen: Option<usize>,
    pub tagged: Option<usize>,

    pub assigned: Vec<String>,
    pub next_id: Option<u64>,
}

impl TraceEvent {
    pub fn now(pass: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            pass: pass.to_string(),
            elements_seen: None,
            tagged: None,
            assigned: vec![],
            next_id: None,
        }
    }

    pub fn with_elements_seen(mut self, count: usize) -> Self {
        self.elements_seen = Some(count);
        self
    }

    pub fn with_tagged(mut self, count: usize) -> Self {
        self.tagged = Some(count);
        self
    }

    pub fn with_assigned(mut self, identities: &[String]) -> Self {
        self.assigned = identities.to_vec();
        self
    }

    pub fn with_next_id(mut self, next_id: u64) -> Self {
        self.next_id = Some(next_id);
        self
    }
}
