//! Damage pipeline - applying a damage event to an entity
//!
//! [`deal_damage`] runs, in order:
//! 1. status effect damage hooks (may change the amount)
//! 2. the entity's damage modifier chain
//! 3. health subtraction, clamped to `0..=max_health`
//! 4. health display update
//! 5. floating hit feedback at the entity's position
//! 6. death (once), or hit flash + hurt cue
//! 7. knockback impulse away from the source
//!
//! Zero and negative amounts are not special-cased and run every step.

mod heal;

pub use heal::{heal, HealPolicy};

use crate::entity::Entity;
use crate::ports::DamageSinks;
use item_core::Vec2;

/// One incoming hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageEvent {
    pub amount: i32,
    /// Knockback impulse magnitude
    pub force: f32,
    /// Where the hit came from
    pub source: Vec2,
}

impl DamageEvent {
    pub fn new(amount: i32, force: f32, source: Vec2) -> Self {
        DamageEvent {
            amount,
            force,
            source,
        }
    }
}

/// What a damage call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Damage landed and the entity survived
    Applied { amount: i32, health: i32 },
    /// Damage landed and killed the entity
    Killed { amount: i32 },
    /// The entity was already dead; nothing happened
    Ignored,
}

impl DamageOutcome {
    pub fn was_applied(&self) -> bool {
        !matches!(self, DamageOutcome::Ignored)
    }

    pub fn is_kill(&self) -> bool {
        matches!(self, DamageOutcome::Killed { .. })
    }
}

/// Apply `event` to `entity`, notifying `sinks` of every side effect
pub fn deal_damage<S>(entity: &mut Entity, event: DamageEvent, sinks: &mut S) -> DamageOutcome
where
    S: DamageSinks + ?Sized,
{
    if !entity.is_alive() {
        tracing::debug!(entity = %entity.id(), "damage on dead entity ignored");
        return DamageOutcome::Ignored;
    }

    let mut amount = event.amount;
    entity.run_damage_hooks(&mut amount);
    let amount = entity.damage_modifiers().fold(amount);

    let max = entity.max_health();
    let health = entity.health().saturating_sub(amount).clamp(0, max);
    entity.set_health(health);

    let id = entity.id();
    sinks.set_health(id, health, max);
    sinks.show_hit_feedback(amount, entity.position);

    let outcome = if health <= 0 {
        if entity.kill() {
            tracing::info!(entity = %id, amount, "entity died");
            sinks.disable(id);
            if entity.has_death_cue() {
                sinks.play_death_cue(id);
            }
        }
        DamageOutcome::Killed { amount }
    } else {
        entity.start_flash();
        sinks.play_hit_flash(id);
        if entity.has_hurt_cue() {
            sinks.play_hurt_cue(id);
        }
        DamageOutcome::Applied { amount, health }
    };

    let impulse = (entity.position - event.source).normalize_or_zero() * event.force;
    sinks.apply_impulse(id, impulse);

    tracing::trace!(entity = %id, amount, health, "damage applied");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::Barrier;
    use crate::entity::EntityKind;
    use crate::test_support::RecordingSinks;
    use item_core::EntityId;
    use proptest::prelude::*;

    fn monster(max: i32) -> Entity {
        Entity::new(EntityId(3), EntityKind::Monster, max, 2.0).with_position(Vec2::new(2.0, 0.0))
    }

    fn hit(amount: i32) -> DamageEvent {
        DamageEvent::new(amount, 4.0, Vec2::ZERO)
    }

    #[test]
    fn test_damage_scenario_hurt_then_death_once() {
        let mut entity = monster(100);
        let mut sinks = RecordingSinks::default();

        let outcome = deal_damage(&mut entity, hit(30), &mut sinks);
        assert_eq!(outcome, DamageOutcome::Applied { amount: 30, health: 70 });
        assert_eq!(entity.health(), 70);
        assert_eq!(sinks.hurt_cues, vec![EntityId(3)]);
        assert!(sinks.death_cues.is_empty());

        let outcome = deal_damage(&mut entity, hit(80), &mut sinks);
        assert_eq!(outcome, DamageOutcome::Killed { amount: 80 });
        assert_eq!(entity.health(), 0);
        assert_eq!(sinks.death_cues, vec![EntityId(3)]);
        assert_eq!(sinks.disabled, vec![EntityId(3)]);

        let outcome = deal_damage(&mut entity, hit(10), &mut sinks);
        assert_eq!(outcome, DamageOutcome::Ignored);
        assert_eq!(entity.health(), 0);
        assert_eq!(sinks.death_cues.len(), 1);
        assert_eq!(sinks.disabled.len(), 1);
    }

    #[test]
    fn test_side_effect_order_payload() {
        let mut entity = monster(50);
        let mut sinks = RecordingSinks::default();

        deal_damage(&mut entity, hit(5), &mut sinks);

        assert_eq!(sinks.health, vec![(EntityId(3), 45, 50)]);
        assert_eq!(sinks.hit_feedback, vec![(5, Vec2::new(2.0, 0.0))]);
        assert_eq!(sinks.flashes, vec![EntityId(3)]);
        // Source at origin, entity at +x: pushed along +x with the event force
        assert_eq!(sinks.impulses, vec![(EntityId(3), Vec2::new(4.0, 0.0))]);
    }

    #[test]
    fn test_effects_run_before_modifiers() {
        let mut entity = monster(100);
        entity.add_effect(Box::new(Barrier::new(5)));
        entity.add_damage_modifier(|d| d * 2);
        let mut sinks = RecordingSinks::default();

        // (20 - 5 absorbed) * 2
        let outcome = deal_damage(&mut entity, hit(20), &mut sinks);
        assert_eq!(outcome, DamageOutcome::Applied { amount: 30, health: 70 });
    }

    #[test]
    fn test_zero_damage_runs_every_side_effect() {
        let mut entity = monster(10);
        let mut sinks = RecordingSinks::default();

        let outcome = deal_damage(&mut entity, hit(0), &mut sinks);
        assert_eq!(outcome, DamageOutcome::Applied { amount: 0, health: 10 });
        assert_eq!(sinks.health.len(), 1);
        assert_eq!(sinks.hit_feedback.len(), 1);
        assert_eq!(sinks.hurt_cues.len(), 1);
        assert_eq!(sinks.impulses.len(), 1);
    }

    #[test]
    fn test_negative_damage_cannot_overheal() {
        let mut entity = monster(10);
        let mut sinks = RecordingSinks::default();

        deal_damage(&mut entity, hit(4), &mut sinks);
        deal_damage(&mut entity, hit(-50), &mut sinks);
        assert_eq!(entity.health(), 10);
    }

    #[test]
    fn test_no_hurt_cue_when_unconfigured() {
        let mut entity = monster(10).with_cues(false, false);
        let mut sinks = RecordingSinks::default();

        deal_damage(&mut entity, hit(3), &mut sinks);
        deal_damage(&mut entity, hit(30), &mut sinks);
        assert!(sinks.hurt_cues.is_empty());
        assert!(sinks.death_cues.is_empty());
        assert_eq!(sinks.disabled.len(), 1);
    }

    #[test]
    fn test_knockback_from_same_position_is_zero() {
        let mut entity = monster(10);
        let mut sinks = RecordingSinks::default();

        let source = entity.position;
        deal_damage(&mut entity, DamageEvent::new(1, 9.0, source), &mut sinks);
        assert_eq!(sinks.impulses, vec![(EntityId(3), Vec2::ZERO)]);
    }

    proptest! {
        #[test]
        fn prop_health_is_clamped(max in 1i32..500, start_damage in 0i32..500, amount in 0i32..1000) {
            let mut entity = monster(max);
            let mut sinks = RecordingSinks::default();
            deal_damage(&mut entity, hit(start_damage.min(max - 1)), &mut sinks);
            let before = entity.health();

            deal_damage(&mut entity, hit(amount), &mut sinks);

            prop_assert_eq!(entity.health(), (before - amount).clamp(0, max));
            prop_assert!(entity.health() >= 0 && entity.health() <= max);
        }
    }
}
