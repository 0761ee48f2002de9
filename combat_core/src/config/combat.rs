//! Combat tuning: entity templates, attack timing, lunge curve

use super::{ensure, ConfigError};
use crate::attack::{AttackTiming, LungeCurve};
use crate::damage::HealPolicy;
use crate::entity::{Entity, EntityKind};
use item_core::{EntityId, Vec2};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level combat configuration
///
/// The `[player]` and `[monster]` sections only override the fields they
/// name; everything else keeps that kind's own template defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombatConfig {
    pub player: EntityTemplate,
    pub monster: EntityTemplate,
    pub attack: AttackTiming,
    pub lunge: LungeCurve,
    pub heal_policy: HealPolicy,
}

impl Default for CombatConfig {
    fn default() -> Self {
        CombatConfig {
            player: EntityTemplate::player(),
            monster: EntityTemplate::monster(),
            attack: AttackTiming::default(),
            lunge: LungeCurve::default(),
            heal_policy: HealPolicy::default(),
        }
    }
}

/// On-disk layout of a combat config file
#[derive(Debug, Deserialize)]
struct CombatFileConfig {
    #[serde(default)]
    player: TemplateOverrides,
    #[serde(default)]
    monster: TemplateOverrides,
    #[serde(default)]
    attack: AttackTiming,
    #[serde(default)]
    lunge: LungeCurve,
    #[serde(default)]
    heal_policy: HealPolicy,
}

/// Fields a config section may override on a template
#[derive(Debug, Default, Deserialize)]
struct TemplateOverrides {
    kind: Option<EntityKind>,
    max_health: Option<i32>,
    speed: Option<f32>,
    hurt_cue: Option<bool>,
    death_cue: Option<bool>,
}

impl TemplateOverrides {
    fn apply(self, base: EntityTemplate, label: &str) -> Result<EntityTemplate, ConfigError> {
        if let Some(kind) = self.kind {
            ensure(kind == base.kind, || {
                format!("{label}: kind must be {:?}, got {:?}", base.kind, kind)
            })?;
        }
        Ok(EntityTemplate {
            kind: base.kind,
            max_health: self.max_health.unwrap_or(base.max_health),
            speed: self.speed.unwrap_or(base.speed),
            hurt_cue: self.hurt_cue.unwrap_or(base.hurt_cue),
            death_cue: self.death_cue.unwrap_or(base.death_cue),
        })
    }
}

impl CombatFileConfig {
    fn into_config(self) -> Result<CombatConfig, ConfigError> {
        let config = CombatConfig {
            player: self.player.apply(EntityTemplate::player(), "player")?,
            monster: self.monster.apply(EntityTemplate::monster(), "monster")?,
            attack: self.attack,
            lunge: self.lunge,
            heal_policy: self.heal_policy,
        };
        config.validate()?;
        Ok(config)
    }
}

impl CombatConfig {
    /// Load and validate a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let file: CombatFileConfig = super::load_toml(path)?;
        file.into_config()
    }

    /// Parse and validate a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: CombatFileConfig = super::parse_toml(content)?;
        file.into_config()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.player.validate("player")?;
        self.monster.validate("monster")?;
        self.attack.validate()?;
        self.lunge.validate()
    }

    /// Template for entities of `kind`
    pub fn template(&self, kind: EntityKind) -> &EntityTemplate {
        match kind {
            EntityKind::Player => &self.player,
            EntityKind::Monster => &self.monster,
        }
    }
}

/// Starting values for a spawned entity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityTemplate {
    pub kind: EntityKind,
    pub max_health: i32,
    /// Base movement speed in units per second
    pub speed: f32,
    pub hurt_cue: bool,
    pub death_cue: bool,
}

impl EntityTemplate {
    pub fn player() -> Self {
        EntityTemplate {
            kind: EntityKind::Player,
            max_health: 100,
            speed: 5.0,
            hurt_cue: true,
            death_cue: true,
        }
    }

    pub fn monster() -> Self {
        EntityTemplate {
            kind: EntityKind::Monster,
            max_health: 30,
            speed: 2.0,
            hurt_cue: true,
            death_cue: true,
        }
    }

    pub fn validate(&self, label: &str) -> Result<(), ConfigError> {
        ensure(self.max_health > 0, || {
            format!("{label}: max_health must be positive, got {}", self.max_health)
        })?;
        ensure(self.speed.is_finite() && self.speed >= 0.0, || {
            format!("{label}: speed must be non-negative, got {}", self.speed)
        })
    }

    /// Build a full-health entity from this template
    pub fn instantiate(&self, id: EntityId, position: Vec2) -> Entity {
        Entity::new(id, self.kind, self.max_health, self.speed)
            .with_position(position)
            .with_cues(self.hurt_cue, self.death_cue)
    }
}
