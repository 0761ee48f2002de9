//! Collaborator interfaces the combat core drives
//!
//! Rendering, audio, physics, locomotion and target queries live outside
//! this crate. They are handed in by the caller; nothing here is looked up
//! globally. All notifications are fire-and-forget.

use crate::attack::{ComboIndex, LungePath};
use item_core::{EntityId, Vec2};

/// Health bar / health readout
pub trait HealthDisplay {
    fn set_health(&mut self, entity: EntityId, current: i32, max: i32);
}

/// Visual and audio feedback for hits and deaths
pub trait Feedback {
    /// Floating damage indicator
    fn show_hit_feedback(&mut self, amount: i32, position: Vec2);
    fn play_hurt_cue(&mut self, entity: EntityId);
    fn play_death_cue(&mut self, entity: EntityId);
    /// Start the short hit flash on the entity's sprite
    fn play_hit_flash(&mut self, entity: EntityId);
    /// Deactivate the entity's scene object
    fn disable(&mut self, entity: EntityId);
}

/// Physics body access
pub trait Physics {
    /// Apply an instantaneous impulse to the entity's body
    fn apply_impulse(&mut self, entity: EntityId, impulse: Vec2);
}

/// Everything the damage pipeline notifies
pub trait DamageSinks: HealthDisplay + Feedback + Physics {}

impl<T: HealthDisplay + Feedback + Physics + ?Sized> DamageSinks for T {}

/// Wielder movement controller
pub trait Locomotion {
    /// Follow `path` for `override_secs`, replacing any current path
    fn set_path(&mut self, path: LungePath, override_secs: f64);
    fn has_reached_path_end(&self) -> bool;
}

/// Overlap query for hit detection
pub trait TargetQuery {
    /// Snapshot of entities within `radius` of `center` at call time
    fn query_in_radius(&self, center: Vec2, radius: f32) -> Vec<EntityId>;
}

/// Attack animation driver
pub trait Animation {
    fn trigger_attack(&mut self, combo: ComboIndex, look_dir: Vec2);
}
