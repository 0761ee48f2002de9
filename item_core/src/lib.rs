//! item_core - Items, weapons and inventory for the combat core
//!
//! This library provides:
//! - Item: an equippable/usable tool with a weak owner back-reference
//! - WeaponStats: damage, knockback and hit-detection settings for weapons
//! - Inventory: the slot collaborator used by the pick-up flow
//! - ItemRegistry: item templates loaded from TOML files

pub mod config;
pub mod inventory;
pub mod item;
mod registry;
pub mod types;

pub use inventory::{pick_up, Inventory, SlotInventory};
pub use item::{Item, ItemKind, WeaponStats};
pub use registry::ItemRegistry;
pub use types::{EntityId, Vec2, WeaponClass};

use std::path::PathBuf;
use thiserror::Error;

/// Error loading item configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error in '{path:?}': {error}")]
    Parse {
        error: toml::de::Error,
        path: Option<PathBuf>,
    },
    #[error("Validation error in '{path:?}': {message}")]
    Validation {
        message: String,
        path: Option<PathBuf>,
    },
}
