use std::time::{Duration, Instant};

use crate::config::SettleConfig;

/// How a settle watch concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    /// No mutation for a full quiet window.
    Quiet,
    /// The hard timeout elapsed first.
    TimedOut,
}

/// Decides when a mutating tree is stable enough to re-run a pass: settled
/// once no mutation has been observed for a quiet window, or once a hard
/// timeout elapses since the watch began, whichever boundary comes first.
///
/// Purely clock-driven. The automation controller feeds mutation
/// notifications in and polls; this crate starts no timers and the tagging
/// passes themselves never consult it.
#[derive(Debug)]
pub struct MutationSettle {
    quiet: Duration,
    timeout: Duration,
    started: Instant,
    last_mutation: Instant,
}

impl MutationSettle {
    /// Starts a watch at `now`. The watch start counts as activity, so a
    /// fresh watch settles one quiet window later at the earliest.
    pub fn new(quiet: Duration, timeout: Duration, now: Instant) -> Self {
        Self {
            quiet,
            timeout,
            started: now,
            last_mutation: now,
        }
    }

    pub fn from_config(config: &SettleConfig, now: Instant) -> Self {
        Self::new(
            Duration::from_millis(config.quiet_ms),
            Duration::from_millis(config.timeout_ms),
            now,
        )
    }

    /// Records one tree-mutation notification.
    pub fn note_mutation(&mut self, at: Instant) {
        self.last_mutation = at;
    }

    /// `None` while still waiting; otherwise the outcome, attributed to
    /// whichever boundary was crossed first.
    pub fn poll(&self, now: Instant) -> Option<SettleOutcome> {
        let quiet_at = self.last_mutation + self.quiet;
        let timeout_at = self.started + self.timeout;

        if now >= quiet_at && quiet_at <= timeout_at {
            Some(SettleOutcome::Quiet)
        } else if now >= timeout_at {
            Some(SettleOutcome::TimedOut)
        } else {
            None
        }
    }
}
