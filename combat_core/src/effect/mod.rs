//! Status effects - attachments reacting to entity lifecycle hooks

mod builtin;

pub use builtin::{Barrier, Slow, Vulnerable};

use crate::entity::Entity;
use std::fmt;

/// Whether an effect stays attached after a hook ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectStatus {
    Active,
    Expired,
}

/// An effect attached to an entity
///
/// Effects manage their own lifetime: a hook returning
/// [`EffectStatus::Expired`] detaches the effect once the current pass over
/// the registry finishes. While a hook runs, the entity's registry is
/// detached from it, so `entity` never sees the effect being iterated.
pub trait StatusEffect {
    fn name(&self) -> &str;

    /// Called once when the effect is added
    fn on_attach(&mut self, _entity: &mut Entity) {}

    /// Called every update with the elapsed seconds
    fn on_update(&mut self, _entity: &mut Entity, _delta: f64) -> EffectStatus {
        EffectStatus::Active
    }

    /// Called before damage is applied; may change the in-flight amount
    fn on_damage(&mut self, _entity: &mut Entity, _damage: &mut i32) -> EffectStatus {
        EffectStatus::Active
    }

    /// Called once when the effect is removed
    fn on_detach(&mut self, _entity: &mut Entity) {}
}

/// Active effects in registration order
#[derive(Default)]
pub struct EffectRegistry {
    effects: Vec<Box<dyn StatusEffect>>,
}

impl fmt::Debug for EffectRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl EffectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.effects.iter().map(|e| e.name())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|n| n == name)
    }

    pub(crate) fn push(&mut self, effect: Box<dyn StatusEffect>) {
        self.effects.push(effect);
    }

    /// Remove the first effect called `name`
    pub(crate) fn take(&mut self, name: &str) -> Option<Box<dyn StatusEffect>> {
        let index = self.effects.iter().position(|e| e.name() == name)?;
        Some(self.effects.remove(index))
    }

    /// Run `hook` on every effect in order, returning the ones that expired
    pub(crate) fn run<F>(&mut self, mut hook: F) -> Vec<Box<dyn StatusEffect>>
    where
        F: FnMut(&mut dyn StatusEffect) -> EffectStatus,
    {
        let mut expired = Vec::new();
        let mut kept = Vec::with_capacity(self.effects.len());
        for mut effect in self.effects.drain(..) {
            match hook(effect.as_mut()) {
                EffectStatus::Active => kept.push(effect),
                EffectStatus::Expired => expired.push(effect),
            }
        }
        self.effects = kept;
        expired
    }

    /// Move every effect of `other` to the end of this registry
    pub(crate) fn append(&mut self, mut other: EffectRegistry) {
        self.effects.append(&mut other.effects);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityKind;
    use item_core::EntityId;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records the order hooks ran in
    struct Probe {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
        updates_left: u32,
    }

    impl StatusEffect for Probe {
        fn name(&self) -> &str {
            self.name
        }

        fn on_update(&mut self, _entity: &mut Entity, _delta: f64) -> EffectStatus {
            self.log.borrow_mut().push(format!("update:{}", self.name));
            self.updates_left = self.updates_left.saturating_sub(1);
            if self.updates_left == 0 {
                EffectStatus::Expired
            } else {
                EffectStatus::Active
            }
        }

        fn on_damage(&mut self, _entity: &mut Entity, damage: &mut i32) -> EffectStatus {
            self.log.borrow_mut().push(format!("damage:{}:{}", self.name, damage));
            *damage += 1;
            EffectStatus::Active
        }

        fn on_detach(&mut self, _entity: &mut Entity) {
            self.log.borrow_mut().push(format!("detach:{}", self.name));
        }
    }

    fn probe(name: &'static str, log: &Rc<RefCell<Vec<String>>>, updates: u32) -> Box<Probe> {
        Box::new(Probe {
            name,
            log: Rc::clone(log),
            updates_left: updates,
        })
    }

    #[test]
    fn test_hooks_run_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut entity = Entity::new(EntityId(1), EntityKind::Monster, 50, 1.0);
        entity.add_effect(probe("a", &log, 5));
        entity.add_effect(probe("b", &log, 5));

        let mut damage = 10;
        entity.run_damage_hooks(&mut damage);

        assert_eq!(damage, 12);
        assert_eq!(*log.borrow(), vec!["damage:a:10", "damage:b:11"]);
    }

    #[test]
    fn test_expired_effects_are_detached() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut entity = Entity::new(EntityId(1), EntityKind::Monster, 50, 1.0);
        entity.add_effect(probe("short", &log, 1));
        entity.add_effect(probe("long", &log, 3));

        entity.update(0.1);

        assert!(!entity.effects().contains("short"));
        assert!(entity.effects().contains("long"));
        assert_eq!(
            *log.borrow(),
            vec!["update:short", "update:long", "detach:short"]
        );
    }

    #[test]
    fn test_registry_never_expires_on_its_own() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut entity = Entity::new(EntityId(1), EntityKind::Monster, 50, 1.0);
        entity.add_effect(probe("sticky", &log, u32::MAX));

        for _ in 0..100 {
            entity.update(10.0);
        }
        assert_eq!(entity.effects().len(), 1);
    }
}
