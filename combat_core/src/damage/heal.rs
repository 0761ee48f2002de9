use crate::entity::Entity;
use crate::ports::HealthDisplay;
use serde::{Deserialize, Serialize};

/// Upper bound applied when healing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealPolicy {
    /// Health never exceeds max health
    #[default]
    Clamp,
    /// Health may exceed max health
    Unclamped,
}

/// Add `amount` to the entity's health
///
/// Returns false (and notifies nothing) if the entity is dead or `amount`
/// is negative.
pub fn heal<D>(entity: &mut Entity, amount: i32, policy: HealPolicy, display: &mut D) -> bool
where
    D: HealthDisplay + ?Sized,
{
    if !entity.is_alive() {
        tracing::debug!(entity = %entity.id(), "heal on dead entity ignored");
        return false;
    }
    if amount < 0 {
        tracing::debug!(entity = %entity.id(), amount, "negative heal ignored");
        return false;
    }

    let raised = entity.health().saturating_add(amount);
    let health = match policy {
        HealPolicy::Clamp => raised.min(entity.max_health()),
        HealPolicy::Unclamped => raised,
    };
    entity.set_health(health);
    display.set_health(entity.id(), health, entity.max_health());
    true
}
