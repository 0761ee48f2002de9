//! combat_core - Combat resolution and stat modification for game entities
//!
//! This library provides:
//! - Cooldown: time gate between uses of an action
//! - ModifierChain / SpeedStat: ordered stat transforms with handle-based removal
//! - StatusEffect / EffectRegistry: effects hooked into entity update and damage
//! - deal_damage / heal: the damage pipeline and its side effects
//! - AttackController: timed two-hit attack sequence with combo and lunge
//! - World: entity container with radius queries
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use combat_core::prelude::*;
//!
//! let config = CombatConfig::load_from_path(Path::new("config/combat.toml"))?;
//! let mut world = World::new();
//! let player = world.spawn(&config.player, Vec2::ZERO);
//! world.spawn(&config.monster, Vec2::new(0.0, 1.0));
//!
//! let mut weapon = equip(Item::unarmed(), player, &config).unwrap();
//! let mut ctx = AttackContext {
//!     world: &mut world,
//!     locomotion: &mut my_locomotion,
//!     animation: &mut my_animation,
//!     sinks: &mut my_sinks,
//! };
//!
//! // Every frame
//! weapon.fire(mouse_down, now, mouse_world_pos, &mut ctx);
//! for hit in weapon.tick(now, &mut ctx) {
//!     println!("hit {} -> {:?}", hit.target, hit.outcome);
//! }
//! ctx.world.update(delta);
//! ```

pub mod attack;
pub mod config;
pub mod cooldown;
pub mod damage;
pub mod effect;
pub mod entity;
pub mod modifier;
pub mod ports;
pub mod prelude;
pub mod weapon;
pub mod world;

#[cfg(test)]
pub(crate) mod test_support;

// Core API
pub use attack::{AttackContext, AttackController, FireOutcome, HitReport};
pub use cooldown::Cooldown;
pub use damage::{deal_damage, heal, DamageEvent, DamageOutcome, HealPolicy};
pub use entity::{Entity, EntityKind};
pub use world::World;

// Configuration
pub use config::{CombatConfig, ConfigError, EntityTemplate};

// Extension points
pub use effect::{EffectStatus, StatusEffect};
pub use weapon::{equip, Weapon};

// Re-export commonly needed item_core types
pub use item_core::{EntityId, Item, Vec2, WeaponStats};
