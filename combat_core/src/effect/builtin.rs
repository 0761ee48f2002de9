use super::{EffectStatus, StatusEffect};
use crate::entity::Entity;
use crate::modifier::ModifierHandle;

/// Multiplies movement speed for a limited time
#[derive(Debug)]
pub struct Slow {
    factor: f32,
    remaining: f64,
    handle: Option<ModifierHandle>,
}

impl Slow {
    /// `factor` of 0.5 halves speed; `duration` is in seconds
    pub fn new(factor: f32, duration: f64) -> Self {
        Slow {
            factor: factor.max(0.0),
            remaining: duration,
            handle: None,
        }
    }
}

impl StatusEffect for Slow {
    fn name(&self) -> &str {
        "slow"
    }

    fn on_attach(&mut self, entity: &mut Entity) {
        let factor = self.factor;
        self.handle = Some(entity.add_speed_modifier(move |speed| speed * factor));
    }

    fn on_update(&mut self, _entity: &mut Entity, delta: f64) -> EffectStatus {
        self.remaining -= delta;
        if self.remaining <= 0.0 {
            EffectStatus::Expired
        } else {
            EffectStatus::Active
        }
    }

    fn on_detach(&mut self, entity: &mut Entity) {
        if let Some(handle) = self.handle.take() {
            entity.remove_speed_modifier(handle);
        }
    }
}

/// Absorbs incoming damage until its capacity is spent
#[derive(Debug)]
pub struct Barrier {
    capacity: i32,
}

impl Barrier {
    pub fn new(capacity: i32) -> Self {
        Barrier {
            capacity: capacity.max(0),
        }
    }

    pub fn capacity(&self) -> i32 {
        self.capacity
    }
}

impl StatusEffect for Barrier {
    fn name(&self) -> &str {
        "barrier"
    }

    fn on_damage(&mut self, _entity: &mut Entity, damage: &mut i32) -> EffectStatus {
        if *damage > 0 {
            let absorbed = (*damage).min(self.capacity);
            *damage -= absorbed;
            self.capacity -= absorbed;
        }
        if self.capacity <= 0 {
            EffectStatus::Expired
        } else {
            EffectStatus::Active
        }
    }
}

/// Increases damage taken by a percentage for a limited time
#[derive(Debug)]
pub struct Vulnerable {
    percent: i32,
    remaining: f64,
}

impl Vulnerable {
    pub fn new(percent: i32, duration: f64) -> Self {
        Vulnerable {
            percent,
            remaining: duration,
        }
    }
}

impl StatusEffect for Vulnerable {
    fn name(&self) -> &str {
        "vulnerable"
    }

    fn on_update(&mut self, _entity: &mut Entity, delta: f64) -> EffectStatus {
        self.remaining -= delta;
        if self.remaining <= 0.0 {
            EffectStatus::Expired
        } else {
            EffectStatus::Active
        }
    }

    fn on_damage(&mut self, _entity: &mut Entity, damage: &mut i32) -> EffectStatus {
        // Widened so large hits saturate instead of overflowing
        let bonus = i64::from(*damage) * i64::from(self.percent) / 100;
        let total = (i64::from(*damage) + bonus).clamp(i64::from(i32::MIN), i64::from(i32::MAX));
        *damage = total as i32;
        EffectStatus::Active
    }
}
