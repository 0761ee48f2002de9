use crate::cooldown::Cooldown;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which swing of the two-hit combo is playing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ComboIndex {
    #[default]
    First,
    Second,
}

impl ComboIndex {
    /// Animation-facing index (0 or 1)
    pub fn index(self) -> u8 {
        match self {
            ComboIndex::First => 0,
            ComboIndex::Second => 1,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ComboIndex::First => ComboIndex::Second,
            ComboIndex::Second => ComboIndex::First,
        }
    }
}

impl fmt::Display for ComboIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Alternating combo state with a reset window
///
/// Attacking again before the reset window closes toggles the index;
/// once it closes the combo starts over at [`ComboIndex::First`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Combo {
    current: ComboIndex,
    reset: Cooldown,
}

impl Combo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ComboIndex {
        self.current
    }

    /// Resolve the index for an attack at `now` and reopen the reset window
    pub fn advance(&mut self, now: f64, reset_secs: f64) -> ComboIndex {
        self.current = if self.reset.is_ready(now) {
            ComboIndex::First
        } else {
            self.current.toggled()
        };
        self.reset.use_at(now, reset_secs);
        self.current
    }
}
