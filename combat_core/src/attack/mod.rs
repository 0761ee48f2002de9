//! Attack sequences
//!
//! An attack runs as a short timed script:
//!
//! ```text
//! Idle --fire--> Windup --windup_secs--> hit pass --gap_secs--> hit pass --> Idle
//! ```
//!
//! The script is stored as a pending step with a due time and advanced by
//! [`AttackController::tick`]. Firing is gated by the weapon cooldown and
//! by the wielder having finished its current movement path; firing while a
//! sequence is pending is rejected.

mod combo;
mod controller;
mod curve;

pub use combo::{Combo, ComboIndex};
pub use controller::{AttackController, AttackPhase};
pub use curve::{LungeCurve, LungePath};

use crate::config::{ensure, ConfigError};
use crate::damage::DamageOutcome;
use crate::ports::{Animation, DamageSinks, Locomotion};
use crate::world::World;
use item_core::{EntityId, Vec2};
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

/// Phase lengths of an attack, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackTiming {
    /// Trigger to first hit pass
    #[serde(default = "default_windup_secs")]
    pub windup_secs: f64,
    /// First hit pass to second hit pass
    #[serde(default = "default_gap_secs")]
    pub gap_secs: f64,
    /// Locomotion override for the lunge path
    #[serde(default = "default_lunge_secs")]
    pub lunge_secs: f64,
    /// Window in which another attack continues the combo
    #[serde(default = "default_combo_reset_secs")]
    pub combo_reset_secs: f64,
}

impl Default for AttackTiming {
    fn default() -> Self {
        AttackTiming {
            windup_secs: default_windup_secs(),
            gap_secs: default_gap_secs(),
            lunge_secs: default_lunge_secs(),
            combo_reset_secs: default_combo_reset_secs(),
        }
    }
}

fn default_windup_secs() -> f64 {
    0.1
}
fn default_gap_secs() -> f64 {
    0.1
}
fn default_lunge_secs() -> f64 {
    0.25
}
fn default_combo_reset_secs() -> f64 {
    1.0
}

impl AttackTiming {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("windup_secs", self.windup_secs),
            ("gap_secs", self.gap_secs),
            ("lunge_secs", self.lunge_secs),
            ("combo_reset_secs", self.combo_reset_secs),
        ] {
            ensure(value.is_finite() && value > 0.0, || {
                format!("attack.{name} must be positive, got {value}")
            })?;
        }
        Ok(())
    }

    /// Trigger to last hit pass
    pub fn total_secs(&self) -> f64 {
        self.windup_secs + self.gap_secs
    }
}

/// Result of a fire input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    /// A new sequence started
    Triggered { combo: ComboIndex },
    /// Input was not a press edge
    NoEdge,
    /// Wielder is missing or dead
    NoWielder,
    /// A sequence is still pending
    AlreadyActive,
    /// Weapon cooldown not ready
    CoolingDown,
    /// Wielder has not reached the end of its current path
    Moving,
}

impl FireOutcome {
    pub fn is_triggered(&self) -> bool {
        matches!(self, FireOutcome::Triggered { .. })
    }
}

/// One target struck by a hit pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitReport {
    pub target: EntityId,
    pub outcome: DamageOutcome,
}

/// Collaborators an attack drives
pub struct AttackContext<'a> {
    pub world: &'a mut World,
    pub locomotion: &'a mut dyn Locomotion,
    pub animation: &'a mut dyn Animation,
    pub sinks: &'a mut dyn DamageSinks,
}

/// Whether `disp` lies strictly within `arc` radians of `aim`
///
/// Angles are measured from +y. The difference is wrapped to `[-PI, PI]`
/// and compared with `<`, so a target exactly on the boundary is missed.
/// A target on top of the attacker always counts.
pub fn within_arc(disp: Vec2, aim: Vec2, arc: f32) -> bool {
    if disp.length_squared() <= f32::EPSILON {
        return true;
    }
    let mut diff = disp.x.atan2(disp.y) - aim.x.atan2(aim.y);
    if diff > PI {
        diff -= TAU;
    } else if diff < -PI {
        diff += TAU;
    }
    diff.abs() < arc.abs()
}
