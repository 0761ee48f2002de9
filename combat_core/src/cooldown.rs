//! Cooldown - minimum interval between uses of an action

use serde::{Deserialize, Serialize};

/// A time gate that reports whether an action may be used again
///
/// Times are in seconds on the caller's clock. The gate length is supplied
/// with every use, so one cooldown can back variable-length timers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Cooldown {
    last_use: Option<f64>,
    duration: f64,
}

impl Cooldown {
    /// Create a cooldown that has never been used (ready)
    pub fn new() -> Self {
        Cooldown::default()
    }

    /// True if never used or at least `duration` has elapsed since the last use
    pub fn is_ready(&self, now: f64) -> bool {
        match self.last_use {
            None => true,
            Some(last) => now - last >= self.duration,
        }
    }

    /// Record a use at `now` and gate for `duration` seconds
    ///
    /// Using while not ready is allowed and restarts the gate.
    pub fn use_at(&mut self, now: f64, duration: f64) {
        self.last_use = Some(now);
        self.duration = duration;
    }

    /// Seconds until ready (0 when ready)
    pub fn remaining(&self, now: f64) -> f64 {
        match self.last_use {
            None => 0.0,
            Some(last) => (self.duration - (now - last)).max(0.0),
        }
    }

    /// Time of the last use
    pub fn last_use(&self) -> Option<f64> {
        self.last_use
    }

    /// Forget the last use
    pub fn reset(&mut self) {
        self.last_use = None;
        self.duration = 0.0;
    }
}
