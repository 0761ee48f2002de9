use super::{
    within_arc, AttackContext, AttackTiming, Combo, ComboIndex, FireOutcome, HitReport, LungeCurve,
    LungePath,
};
use crate::cooldown::Cooldown;
use crate::damage::{deal_damage, DamageEvent};
use crate::entity::EntityKind;
use crate::ports::TargetQuery;
use item_core::{EntityId, Vec2, WeaponStats};

/// Where a sequence currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackPhase {
    Idle,
    /// Waiting for the first hit pass
    Windup,
    /// Waiting for the second hit pass
    Gap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    FirstHit,
    SecondHit,
}

/// Next scripted step and when it runs
#[derive(Debug, Clone, Copy)]
struct Pending {
    step: Step,
    due: f64,
    look_dir: Vec2,
}

/// Drives one weapon's attack sequence for one wielder
#[derive(Debug, Clone)]
pub struct AttackController {
    wielder: EntityId,
    target_kind: EntityKind,
    stats: WeaponStats,
    timing: AttackTiming,
    curve: LungeCurve,
    cooldown: Cooldown,
    combo: Combo,
    /// Fire input seen on the previous call, for edge detection
    pressed: bool,
    pending: Option<Pending>,
}

impl AttackController {
    pub fn new(
        wielder: EntityId,
        target_kind: EntityKind,
        stats: WeaponStats,
        timing: AttackTiming,
        curve: LungeCurve,
    ) -> Self {
        AttackController {
            wielder,
            target_kind,
            stats,
            timing,
            curve,
            cooldown: Cooldown::new(),
            combo: Combo::new(),
            pressed: false,
            pending: None,
        }
    }

    pub fn wielder(&self) -> EntityId {
        self.wielder
    }

    pub fn stats(&self) -> &WeaponStats {
        &self.stats
    }

    pub fn cooldown(&self) -> &Cooldown {
        &self.cooldown
    }

    pub fn combo(&self) -> ComboIndex {
        self.combo.current()
    }

    pub fn phase(&self) -> AttackPhase {
        match self.pending.map(|p| p.step) {
            None => AttackPhase::Idle,
            Some(Step::FirstHit) => AttackPhase::Windup,
            Some(Step::SecondHit) => AttackPhase::Gap,
        }
    }

    pub fn is_active(&self) -> bool {
        self.pending.is_some()
    }

    /// Feed the fire input state at `now`
    ///
    /// Only the press edge can start a sequence. `aim_point` is the world
    /// point the wielder attacks toward; the direction is locked for the
    /// whole sequence.
    pub fn fire(&mut self, pressed: bool, now: f64, aim_point: Vec2, ctx: &mut AttackContext<'_>) -> FireOutcome {
        let edge = pressed && !self.pressed;
        self.pressed = pressed;

        if let Err(outcome) = self.gate(edge, now, ctx) {
            if outcome != FireOutcome::NoEdge {
                tracing::debug!(wielder = %self.wielder, ?outcome, now, "fire skipped");
            }
            return outcome;
        }
        let outcome = self.start(now, aim_point, ctx);
        tracing::debug!(wielder = %self.wielder, ?outcome, now, "attack started");
        outcome
    }

    /// Preconditions for starting a sequence, checked in order
    fn gate(&self, edge: bool, now: f64, ctx: &AttackContext<'_>) -> Result<(), FireOutcome> {
        if !edge {
            return Err(FireOutcome::NoEdge);
        }
        if !ctx.world.get(self.wielder).is_some_and(|e| e.is_alive()) {
            return Err(FireOutcome::NoWielder);
        }
        if self.pending.is_some() {
            return Err(FireOutcome::AlreadyActive);
        }
        if !self.cooldown.is_ready(now) {
            return Err(FireOutcome::CoolingDown);
        }
        if !ctx.locomotion.has_reached_path_end() {
            return Err(FireOutcome::Moving);
        }
        Ok(())
    }

    fn start(&mut self, now: f64, aim_point: Vec2, ctx: &mut AttackContext<'_>) -> FireOutcome {
        let Some(wielder) = ctx.world.get(self.wielder) else {
            return FireOutcome::NoWielder;
        };
        let look_dir = (aim_point - wielder.position).normalize_or_zero();
        let lunge_speed = wielder.base_speed() * self.stats.lunge_scale;

        let combo = self.combo.advance(now, self.timing.combo_reset_secs);
        ctx.animation.trigger_attack(combo, look_dir);
        ctx.locomotion
            .set_path(LungePath::new(look_dir, lunge_speed, self.curve), self.timing.lunge_secs);

        self.pending = Some(Pending {
            step: Step::FirstHit,
            due: now + self.timing.windup_secs,
            look_dir,
        });
        self.cooldown.use_at(now, self.stats.cooldown);

        FireOutcome::Triggered { combo }
    }

    /// Run every step due at or before `now`, in order
    pub fn tick(&mut self, now: f64, ctx: &mut AttackContext<'_>) -> Vec<HitReport> {
        let mut reports = Vec::new();
        while let Some(pending) = self.pending {
            if now < pending.due {
                break;
            }
            reports.extend(self.hit_pass(pending.look_dir, ctx));
            self.pending = match pending.step {
                Step::FirstHit => Some(Pending {
                    step: Step::SecondHit,
                    due: pending.due + self.timing.gap_secs,
                    ..pending
                }),
                Step::SecondHit => None,
            };
        }
        reports
    }

    /// Drop any pending steps
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Damage every target of the target kind in radius and arc
    fn hit_pass(&self, look_dir: Vec2, ctx: &mut AttackContext<'_>) -> Vec<HitReport> {
        let Some(origin) = ctx
            .world
            .get(self.wielder)
            .filter(|e| e.is_alive())
            .map(|e| e.position)
        else {
            return Vec::new();
        };

        let candidates = ctx.world.query_in_radius(origin, self.stats.radius);
        let mut reports = Vec::new();
        for id in candidates {
            if id == self.wielder {
                continue;
            }
            let Some(target) = ctx.world.get_mut(id) else {
                continue;
            };
            if target.kind() != self.target_kind
                || !within_arc(target.position - origin, look_dir, self.stats.arc_radians)
            {
                continue;
            }
            let event = DamageEvent::new(self.stats.damage, self.stats.force, origin);
            let outcome = deal_damage(target, event, &mut *ctx.sinks);
            tracing::trace!(wielder = %self.wielder, target = %id, ?outcome, "hit");
            reports.push(HitReport { target: id, outcome });
        }
        reports
    }
}
