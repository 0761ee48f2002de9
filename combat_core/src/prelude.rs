//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Core types
pub use crate::entity::{Entity, EntityKind, LifeState};
pub use crate::world::World;

// Stats
pub use crate::cooldown::Cooldown;
pub use crate::modifier::{ModifierChain, ModifierHandle, SpeedStat};

// Effects
pub use crate::effect::{Barrier, EffectStatus, Slow, StatusEffect, Vulnerable};

// Damage
pub use crate::damage::{deal_damage, heal, DamageEvent, DamageOutcome, HealPolicy};

// Attacks and weapons
pub use crate::attack::{AttackContext, AttackController, ComboIndex, FireOutcome, HitReport, LungeCurve, LungePath};
pub use crate::weapon::{equip, Unarmed, Weapon};

// Collaborators
pub use crate::ports::{Animation, DamageSinks, Feedback, HealthDisplay, Locomotion, Physics, TargetQuery};

// Config
pub use crate::config::{CombatConfig, ConfigError, EntityTemplate};

// Re-exports from item_core
pub use item_core::{EntityId, Inventory, Item, SlotInventory, Vec2, WeaponStats};
