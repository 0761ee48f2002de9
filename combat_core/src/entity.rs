//! Entity - any damageable actor with health and movement speed

use crate::effect::{EffectRegistry, StatusEffect};
use crate::modifier::{ModifierChain, ModifierHandle, SpeedStat};
use item_core::{EntityId, Vec2};
use serde::{Deserialize, Serialize};

/// Seconds the hit flash stays white before turning red
const FLASH_WHITE_SECS: f64 = 0.1;
/// Seconds the hit flash stays red before clearing
const FLASH_RED_SECS: f64 = 0.1;

/// Entity category, used to pick attack targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Player,
    Monster,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeState {
    Alive,
    /// Terminal; damage and healing are ignored from here on
    Dead,
}

/// Current hit-flash tint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashColor {
    None,
    White,
    Red,
}

#[derive(Debug, Clone, Copy, Default)]
struct HitFlash {
    elapsed: Option<f64>,
}

impl HitFlash {
    fn start(&mut self) {
        self.elapsed = Some(0.0);
    }

    fn tick(&mut self, delta: f64) {
        if let Some(t) = self.elapsed {
            let t = t + delta;
            self.elapsed = (t < FLASH_WHITE_SECS + FLASH_RED_SECS).then_some(t);
        }
    }

    fn color(&self) -> FlashColor {
        match self.elapsed {
            Some(t) if t < FLASH_WHITE_SECS => FlashColor::White,
            Some(_) => FlashColor::Red,
            None => FlashColor::None,
        }
    }
}

/// A damageable actor
///
/// Owned by the [`World`](crate::world::World). Health stays within
/// `0..=max_health` except under the unclamped heal policy.
#[derive(Debug)]
pub struct Entity {
    id: EntityId,
    kind: EntityKind,
    /// World position
    pub position: Vec2,
    max_health: i32,
    health: i32,
    speed: SpeedStat,
    damage_modifiers: ModifierChain<i32>,
    effects: EffectRegistry,
    life: LifeState,
    hurt_cue: bool,
    death_cue: bool,
    flash: HitFlash,
}

impl Entity {
    /// Create a full-health entity
    ///
    /// `max_health` below 1 is raised to 1; templates reject it earlier.
    pub fn new(id: EntityId, kind: EntityKind, max_health: i32, base_speed: f32) -> Self {
        let max_health = max_health.max(1);
        Entity {
            id,
            kind,
            position: Vec2::ZERO,
            max_health,
            health: max_health,
            speed: SpeedStat::new(base_speed),
            damage_modifiers: ModifierChain::new(),
            effects: EffectRegistry::new(),
            life: LifeState::Alive,
            hurt_cue: true,
            death_cue: true,
            flash: HitFlash::default(),
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// Whether hurt and death cues are configured for this entity
    pub fn with_cues(mut self, hurt: bool, death: bool) -> Self {
        self.hurt_cue = hurt;
        self.death_cue = death;
        self
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn life(&self) -> LifeState {
        self.life
    }

    pub fn is_alive(&self) -> bool {
        self.life == LifeState::Alive
    }

    pub fn has_hurt_cue(&self) -> bool {
        self.hurt_cue
    }

    pub fn has_death_cue(&self) -> bool {
        self.death_cue
    }

    // === Speed ===

    /// Effective speed after modifiers
    pub fn speed(&self) -> f32 {
        self.speed.current()
    }

    pub fn base_speed(&self) -> f32 {
        self.speed.base()
    }

    pub fn add_speed_modifier(&mut self, modifier: impl Fn(f32) -> f32 + 'static) -> ModifierHandle {
        self.speed.add(modifier)
    }

    pub fn remove_speed_modifier(&mut self, handle: ModifierHandle) -> bool {
        self.speed.remove(handle)
    }

    pub fn refresh_speed(&mut self) {
        self.speed.refresh();
    }

    // === Damage modifiers ===

    pub fn add_damage_modifier(&mut self, modifier: impl Fn(i32) -> i32 + 'static) -> ModifierHandle {
        self.damage_modifiers.add(modifier)
    }

    pub fn remove_damage_modifier(&mut self, handle: ModifierHandle) -> bool {
        self.damage_modifiers.remove(handle)
    }

    pub fn damage_modifiers(&self) -> &ModifierChain<i32> {
        &self.damage_modifiers
    }

    // === Status effects ===

    pub fn effects(&self) -> &EffectRegistry {
        &self.effects
    }

    /// Attach an effect and run its attach hook
    pub fn add_effect(&mut self, mut effect: Box<dyn StatusEffect>) {
        effect.on_attach(self);
        self.effects.push(effect);
    }

    /// Detach the first effect called `name`
    pub fn remove_effect(&mut self, name: &str) -> bool {
        match self.effects.take(name) {
            Some(mut effect) => {
                effect.on_detach(self);
                true
            }
            None => false,
        }
    }

    /// Per-frame update: advances the hit flash and runs update hooks
    pub fn update(&mut self, delta: f64) {
        if !self.is_alive() {
            return;
        }
        self.flash.tick(delta);
        self.run_effects(|effect, entity| effect.on_update(entity, delta));
    }

    pub(crate) fn run_damage_hooks(&mut self, damage: &mut i32) {
        self.run_effects(|effect, entity| effect.on_damage(entity, &mut *damage));
    }

    fn run_effects<F>(&mut self, mut hook: F)
    where
        F: FnMut(&mut dyn StatusEffect, &mut Entity) -> crate::effect::EffectStatus,
    {
        let mut active = std::mem::take(&mut self.effects);
        let expired = active.run(|effect| hook(effect, &mut *self));

        // Effects attached during the pass landed in the fresh registry
        let added = std::mem::replace(&mut self.effects, active);
        self.effects.append(added);

        for mut effect in expired {
            tracing::trace!(entity = %self.id, effect = effect.name(), "effect expired");
            effect.on_detach(self);
        }
    }

    // === Health ===

    pub(crate) fn set_health(&mut self, health: i32) {
        self.health = health;
    }

    /// Move to the dead state; true only on the first call
    pub(crate) fn kill(&mut self) -> bool {
        if self.life == LifeState::Dead {
            return false;
        }
        self.health = 0;
        self.life = LifeState::Dead;
        true
    }

    pub(crate) fn start_flash(&mut self) {
        self.flash.start();
    }

    pub fn flash_color(&self) -> FlashColor {
        self.flash.color()
    }
}
