//! Weapons - items a wielder can attack with

use crate::attack::{AttackContext, AttackController, FireOutcome, HitReport};
use crate::config::CombatConfig;
use crate::entity::EntityKind;
use item_core::{EntityId, Item, Vec2, WeaponClass};

/// Capabilities of an equipped weapon
pub trait Weapon {
    fn item(&self) -> &Item;

    /// Primary attack input
    fn fire(&mut self, pressed: bool, now: f64, aim_point: Vec2, ctx: &mut AttackContext<'_>) -> FireOutcome;

    /// Secondary attack input
    fn alt_fire(&mut self, pressed: bool);

    /// Advance any running attack
    fn tick(&mut self, now: f64, ctx: &mut AttackContext<'_>) -> Vec<HitReport>;

    /// Put the weapon on the ground; false if it cannot leave the wielder
    fn drop_item(&mut self, position: Vec2) -> bool;
}

/// Build the weapon implementation for `item`
///
/// Hands the item back if it is not a weapon.
pub fn equip(item: Item, wielder: EntityId, config: &CombatConfig) -> Result<Box<dyn Weapon>, Item> {
    let Some(class) = item.weapon_stats().map(|s| s.class) else {
        tracing::debug!(item = %item.name, "not a weapon");
        return Err(item);
    };
    match class {
        WeaponClass::Unarmed => Ok(Box::new(Unarmed::new(item, wielder, config))),
    }
}

/// Bare hands: a two-hit lunging combo against monsters
#[derive(Debug)]
pub struct Unarmed {
    item: Item,
    attack: AttackController,
}

impl Unarmed {
    pub fn new(mut item: Item, wielder: EntityId, config: &CombatConfig) -> Self {
        let stats = item.weapon_stats().copied().unwrap_or_default();
        item.take_by(wielder);
        Unarmed {
            item,
            attack: AttackController::new(wielder, EntityKind::Monster, stats, config.attack, config.lunge),
        }
    }

    pub fn controller(&self) -> &AttackController {
        &self.attack
    }
}

impl Weapon for Unarmed {
    fn item(&self) -> &Item {
        &self.item
    }

    fn fire(&mut self, pressed: bool, now: f64, aim_point: Vec2, ctx: &mut AttackContext<'_>) -> FireOutcome {
        self.attack.fire(pressed, now, aim_point, ctx)
    }

    fn alt_fire(&mut self, pressed: bool) {
        if pressed {
            tracing::info!("you misplace your weapon");
        }
    }

    fn tick(&mut self, now: f64, ctx: &mut AttackContext<'_>) -> Vec<HitReport> {
        self.attack.tick(now, ctx)
    }

    fn drop_item(&mut self, position: Vec2) -> bool {
        self.item.drop_at(position)
    }
}
