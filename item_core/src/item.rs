use crate::types::{EntityId, Vec2, WeaponClass};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mass units per point of item mass
pub const MASS_CONSTANT: u32 = 100;

/// Combat stats carried by a weapon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponStats {
    /// Which weapon implementation drives this item
    pub class: WeaponClass,
    /// Damage dealt per hit pass
    pub damage: i32,
    /// Knockback impulse magnitude
    pub force: f32,
    /// Hit-detection radius around the wielder
    pub radius: f32,
    /// Half-width of the hit arc, in radians
    pub arc_radians: f32,
    /// Multiplier applied to the wielder's speed during the lunge
    pub lunge_scale: f32,
    /// Minimum seconds between activations
    pub cooldown: f64,
}

impl WeaponStats {
    /// Bare-handed defaults
    pub fn unarmed() -> Self {
        WeaponStats {
            class: WeaponClass::Unarmed,
            damage: 10,
            force: 5.0,
            radius: 1.2,
            arc_radians: 1.0,
            lunge_scale: 1.0,
            cooldown: 0.3,
        }
    }
}

impl Default for WeaponStats {
    fn default() -> Self {
        WeaponStats::unarmed()
    }
}

/// What an item is used for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon(WeaponStats),
    Misc,
}

/// An equippable/usable tool
///
/// An item is owned either by a wielder's inventory or by the world while it
/// lies on the ground. `owner` is only a back-reference; moving the `Item`
/// value is what transfers ownership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Template ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Item kind and kind-specific stats
    pub kind: ItemKind,
    mass: u32,
    droppable: bool,
    owner: Option<EntityId>,
    /// Position while lying in the world (None while carried)
    position: Option<Vec2>,
}

impl Item {
    /// Create a miscellaneous item
    pub fn new(id: impl Into<String>, name: impl Into<String>, mass: u32) -> Self {
        Item {
            id: id.into(),
            name: name.into(),
            kind: ItemKind::Misc,
            mass,
            droppable: true,
            owner: None,
            position: None,
        }
    }

    /// Create a weapon item
    pub fn weapon(
        id: impl Into<String>,
        name: impl Into<String>,
        mass: u32,
        stats: WeaponStats,
    ) -> Self {
        Item {
            kind: ItemKind::Weapon(stats),
            ..Item::new(id, name, mass)
        }
    }

    /// The bare-handed pseudo-weapon. It can never be dropped.
    pub fn unarmed() -> Self {
        Item::weapon("unarmed", "Unarmed", 1, WeaponStats::unarmed()).with_droppable(false)
    }

    pub fn with_droppable(mut self, droppable: bool) -> Self {
        self.droppable = droppable;
        self
    }

    pub fn mass(&self) -> u32 {
        self.mass
    }

    /// Mass in physics units
    pub fn scaled_mass(&self) -> u32 {
        self.mass.saturating_mul(MASS_CONSTANT)
    }

    pub fn is_droppable(&self) -> bool {
        self.droppable
    }

    pub fn owner(&self) -> Option<EntityId> {
        self.owner
    }

    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Whether the item is lying in the world
    pub fn is_on_ground(&self) -> bool {
        self.position.is_some()
    }

    pub fn weapon_stats(&self) -> Option<&WeaponStats> {
        match &self.kind {
            ItemKind::Weapon(stats) => Some(stats),
            ItemKind::Misc => None,
        }
    }

    /// Take the item off the ground and hand it to `owner`
    pub fn take_by(&mut self, owner: EntityId) {
        self.owner = Some(owner);
        self.position = None;
    }

    /// Place the item on the ground at `position`
    ///
    /// Returns false (and leaves the item untouched) if the item cannot be
    /// dropped.
    pub fn drop_at(&mut self, position: Vec2) -> bool {
        if !self.droppable {
            tracing::debug!(item = %self.name, "drop refused");
            return false;
        }
        self.owner = None;
        self.position = Some(position);
        true
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ItemKind::Weapon(stats) => write!(f, "{} ({}, {} dmg)", self.name, stats.class, stats.damage),
            ItemKind::Misc => write!(f, "{}", self.name),
        }
    }
}
