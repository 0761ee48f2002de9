use crate::item::{Item, WeaponStats};
use crate::types::WeaponClass;
use serde::Deserialize;

/// TOML configuration for an item file
#[derive(Debug, Deserialize)]
pub struct ItemFileConfig {
    pub item: ItemConfig,
    #[serde(default)]
    pub weapon: Option<WeaponConfig>,
}

/// Configuration for the item itself
#[derive(Debug, Deserialize)]
pub struct ItemConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mass: u32,
    #[serde(default = "default_droppable")]
    pub droppable: bool,
}

fn default_droppable() -> bool {
    true
}

/// Weapon section of an item file
#[derive(Debug, Deserialize)]
pub struct WeaponConfig {
    #[serde(default)]
    pub class: WeaponClass,
    pub damage: i32,
    pub force: f32,
    pub radius: f32,
    pub arc_radians: f32,
    #[serde(default = "default_lunge_scale")]
    pub lunge_scale: f32,
    pub cooldown: f64,
}

fn default_lunge_scale() -> f32 {
    1.0
}

impl WeaponConfig {
    fn validate(&self) -> Result<(), String> {
        // Negated so NaN is rejected
        if !(self.cooldown.is_finite() && self.cooldown > 0.0) {
            return Err(format!("cooldown must be positive, got {}", self.cooldown));
        }
        if !(self.radius.is_finite() && self.radius >= 0.0) {
            return Err(format!("radius must not be negative, got {}", self.radius));
        }
        if !(self.force.is_finite() && self.force >= 0.0) {
            return Err(format!("force must not be negative, got {}", self.force));
        }
        if !(self.arc_radians.is_finite() && self.arc_radians >= 0.0) {
            return Err(format!("arc_radians must not be negative, got {}", self.arc_radians));
        }
        if !self.lunge_scale.is_finite() {
            return Err(format!("lunge_scale must be finite, got {}", self.lunge_scale));
        }
        Ok(())
    }

    fn stats(&self) -> WeaponStats {
        WeaponStats {
            class: self.class,
            damage: self.damage,
            force: self.force,
            radius: self.radius,
            arc_radians: self.arc_radians,
            lunge_scale: self.lunge_scale,
            cooldown: self.cooldown,
        }
    }
}

impl ItemFileConfig {
    /// Validate and build the item template
    pub fn into_item(self) -> Result<Item, String> {
        if self.item.id.trim().is_empty() {
            return Err("item id must not be empty".to_string());
        }
        if self.item.name.trim().is_empty() {
            return Err(format!("item '{}' has an empty name", self.item.id));
        }

        let item = match &self.weapon {
            Some(weapon) => {
                weapon.validate()?;
                Item::weapon(self.item.id, self.item.name, self.item.mass, weapon.stats())
            }
            None => Item::new(self.item.id, self.item.name, self.item.mass),
        };
        Ok(item.with_droppable(self.item.droppable))
    }
}
