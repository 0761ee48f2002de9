use serde::{Deserialize, Serialize};
use std::fmt;

pub use glam::Vec2;

/// Identifier of an entity living in the game world
///
/// Items only hold this as a weak back-reference to their owner; the
/// entity itself is owned by the world container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Weapon variants, each backed by a concrete weapon implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeaponClass {
    /// Bare-handed two-hit combo attack
    #[default]
    Unarmed,
}

impl fmt::Display for WeaponClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeaponClass::Unarmed => write!(f, "Unarmed"),
        }
    }
}
