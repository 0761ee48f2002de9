//! Recording collaborators for unit tests

use crate::attack::{ComboIndex, LungePath};
use crate::ports::{Animation, Feedback, HealthDisplay, Locomotion, Physics};
use item_core::{EntityId, Vec2};

#[derive(Debug, Default)]
pub(crate) struct RecordingSinks {
    pub health: Vec<(EntityId, i32, i32)>,
    pub hit_feedback: Vec<(i32, Vec2)>,
    pub hurt_cues: Vec<EntityId>,
    pub death_cues: Vec<EntityId>,
    pub flashes: Vec<EntityId>,
    pub disabled: Vec<EntityId>,
    pub impulses: Vec<(EntityId, Vec2)>,
}

impl HealthDisplay for RecordingSinks {
    fn set_health(&mut self, entity: EntityId, current: i32, max: i32) {
        self.health.push((entity, current, max));
    }
}

impl Feedback for RecordingSinks {
    fn show_hit_feedback(&mut self, amount: i32, position: Vec2) {
        self.hit_feedback.push((amount, position));
    }

    fn play_hurt_cue(&mut self, entity: EntityId) {
        self.hurt_cues.push(entity);
    }

    fn play_death_cue(&mut self, entity: EntityId) {
        self.death_cues.push(entity);
    }

    fn play_hit_flash(&mut self, entity: EntityId) {
        self.flashes.push(entity);
    }

    fn disable(&mut self, entity: EntityId) {
        self.disabled.push(entity);
    }
}

impl Physics for RecordingSinks {
    fn apply_impulse(&mut self, entity: EntityId, impulse: Vec2) {
        self.impulses.push((entity, impulse));
    }
}

/// Locomotion that is at its path end unless `moving` is set
#[derive(Debug, Default)]
pub(crate) struct ScriptedLocomotion {
    pub moving: bool,
    pub paths: Vec<(LungePath, f64)>,
}

impl Locomotion for ScriptedLocomotion {
    fn set_path(&mut self, path: LungePath, override_secs: f64) {
        self.paths.push((path, override_secs));
    }

    fn has_reached_path_end(&self) -> bool {
        !self.moving
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingAnimation {
    pub attacks: Vec<(ComboIndex, Vec2)>,
}

impl Animation for RecordingAnimation {
    fn trigger_attack(&mut self, combo: ComboIndex, look_dir: Vec2) {
        self.attacks.push((combo, look_dir));
    }
}
