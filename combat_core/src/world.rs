//! World - owns every entity in play

use crate::config::{CombatConfig, EntityTemplate};
use crate::damage::{self, DamageEvent, DamageOutcome, HealPolicy};
use crate::entity::{Entity, EntityKind};
use crate::ports::{DamageSinks, HealthDisplay, TargetQuery};
use item_core::{EntityId, Vec2};
use std::collections::BTreeMap;

/// Entity container, iterated in id order
#[derive(Debug, Default)]
pub struct World {
    entities: BTreeMap<EntityId, Entity>,
    next_id: u32,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entity from a template and return its id
    pub fn spawn(&mut self, template: &EntityTemplate, position: Vec2) -> EntityId {
        let id = EntityId(self.next_id);
        self.insert(template.instantiate(id, position));
        id
    }

    /// Spawn an entity of `kind` from the configured template
    pub fn spawn_kind(&mut self, config: &CombatConfig, kind: EntityKind, position: Vec2) -> EntityId {
        self.spawn(config.template(kind), position)
    }

    /// Add a prebuilt entity, replacing any entity with the same id
    pub fn insert(&mut self, entity: Entity) -> Option<Entity> {
        let id = entity.id();
        self.next_id = self.next_id.max(id.0.saturating_add(1));
        self.entities.insert(id, entity)
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        self.entities.remove(&id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// First living entity of `kind`, in id order
    pub fn first_of_kind(&self, kind: EntityKind) -> Option<EntityId> {
        self.iter()
            .find(|e| e.kind() == kind && e.is_alive())
            .map(Entity::id)
    }

    /// Advance every entity by `delta` seconds
    pub fn update(&mut self, delta: f64) {
        for entity in self.entities.values_mut() {
            entity.update(delta);
        }
    }

    /// Run the damage pipeline on one entity; unknown ids are ignored
    pub fn deal_damage<S>(&mut self, id: EntityId, event: DamageEvent, sinks: &mut S) -> DamageOutcome
    where
        S: DamageSinks + ?Sized,
    {
        match self.entities.get_mut(&id) {
            Some(entity) => damage::deal_damage(entity, event, sinks),
            None => {
                tracing::debug!(entity = %id, "damage on unknown entity ignored");
                DamageOutcome::Ignored
            }
        }
    }

    pub fn heal<D>(&mut self, id: EntityId, amount: i32, policy: HealPolicy, display: &mut D) -> bool
    where
        D: HealthDisplay + ?Sized,
    {
        self.entities
            .get_mut(&id)
            .is_some_and(|entity| damage::heal(entity, amount, policy, display))
    }

    /// Heal using the configured heal policy
    pub fn heal_configured<D>(
        &mut self,
        config: &CombatConfig,
        id: EntityId,
        amount: i32,
        display: &mut D,
    ) -> bool
    where
        D: HealthDisplay + ?Sized,
    {
        self.heal(id, amount, config.heal_policy, display)
    }
}

impl TargetQuery for World {
    /// Living entities whose position lies within `radius` of `center`
    fn query_in_radius(&self, center: Vec2, radius: f32) -> Vec<EntityId> {
        let radius_sq = radius * radius;
        self.iter()
            .filter(|e| e.is_alive() && e.position.distance_squared(center) <= radius_sq)
            .map(Entity::id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingSinks;

    fn world_with_monsters(positions: &[Vec2]) -> World {
        let mut world = World::new();
        world.spawn(&EntityTemplate::player(), Vec2::ZERO);
        for &p in positions {
            world.spawn(&EntityTemplate::monster(), p);
        }
        world
    }

    #[test]
    fn test_spawn_assigns_sequential_ids() {
        let world = world_with_monsters(&[Vec2::X, Vec2::Y]);
        let ids: Vec<_> = world.iter().map(Entity::id).collect();
        assert_eq!(ids, vec![EntityId(0), EntityId(1), EntityId(2)]);
        assert_eq!(world.first_of_kind(EntityKind::Player), Some(EntityId(0)));
    }

    #[test]
    fn test_insert_bumps_next_id() {
        let mut world = World::new();
        world.insert(Entity::new(EntityId(10), EntityKind::Monster, 5, 1.0));
        let id = world.spawn(&EntityTemplate::monster(), Vec2::ZERO);
        assert_eq!(id, EntityId(11));
    }

    #[test]
    fn test_query_in_radius() {
        let world = world_with_monsters(&[Vec2::new(1.0, 0.0), Vec2::new(3.0, 0.0)]);
        let hits = world.query_in_radius(Vec2::ZERO, 1.0);
        // Boundary is inclusive for the overlap query
        assert_eq!(hits, vec![EntityId(0), EntityId(1)]);
    }

    #[test]
    fn test_query_skips_dead() {
        let mut world = world_with_monsters(&[Vec2::new(0.5, 0.0)]);
        let mut sinks = RecordingSinks::default();
        let outcome = world.deal_damage(EntityId(1), DamageEvent::new(1000, 0.0, Vec2::ZERO), &mut sinks);
        assert!(outcome.is_kill());

        assert_eq!(world.query_in_radius(Vec2::ZERO, 2.0), vec![EntityId(0)]);
    }

    #[test]
    fn test_damage_unknown_entity() {
        let mut world = World::new();
        let mut sinks = RecordingSinks::default();
        let outcome = world.deal_damage(EntityId(7), DamageEvent::new(1, 0.0, Vec2::ZERO), &mut sinks);
        assert_eq!(outcome, DamageOutcome::Ignored);
        assert!(sinks.health.is_empty());
        assert!(!world.heal(EntityId(7), 5, HealPolicy::Clamp, &mut sinks));
    }

    #[test]
    fn test_spawn_kind_uses_config_template() {
        let config = CombatConfig::parse("[monster]\nmax_health = 45\nspeed = 1.5\n").unwrap();
        let mut world = World::new();
        let id = world.spawn_kind(&config, EntityKind::Monster, Vec2::X);

        let monster = world.get(id).unwrap();
        assert_eq!(monster.kind(), EntityKind::Monster);
        assert_eq!(monster.health(), 45);
        assert_eq!(monster.speed(), 1.5);
        assert_eq!(monster.position, Vec2::X);
    }

    #[test]
    fn test_heal_configured_follows_policy() {
        let config = CombatConfig::parse("heal_policy = \"unclamped\"\n").unwrap();
        let mut world = World::new();
        let mut sinks = RecordingSinks::default();
        let id = world.spawn_kind(&config, EntityKind::Player, Vec2::ZERO);

        assert!(world.heal_configured(&config, id, 20, &mut sinks));
        assert_eq!(world.get(id).unwrap().health(), 120);

        let clamped = CombatConfig::default();
        let id = world.spawn_kind(&clamped, EntityKind::Player, Vec2::ZERO);
        assert!(world.heal_configured(&clamped, id, 20, &mut sinks));
        assert_eq!(world.get(id).unwrap().health(), 100);
    }
}
