use bevy::prelude::*;

use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════════
// Passive decay
// ═══════════════════════════════════════════════════════════════════════════

/// Advance the vital bars by `dt` seconds.
///
/// Resting suspends passive decay and recovers fatigue instead. Cold
/// drain is climate, not metabolism, so it bites whether the player
/// rests or not.
pub fn decay_vitals(vitals: &mut Vitals, rates: &VitalRates, resting: bool, dt: f32) {
    if resting {
        vitals.fatigue = (vitals.fatigue + REST_FATIGUE_RECOVERY_PER_SEC * dt).min(MAX_VITAL);
    } else {
        vitals.fatigue = (vitals.fatigue - rates.fatigue_per_sec * dt).max(0.0);
        vitals.hunger = (vitals.hunger - rates.hunger_per_sec * rates.hunger_scale * dt).max(0.0);
        vitals.thirst = (vitals.thirst - rates.thirst_per_sec * rates.thirst_scale * dt).max(0.0);
    }
    if rates.cold_drain_per_sec > 0.0 {
        vitals.health = (vitals.health - rates.cold_drain_per_sec * dt).max(0.0);
    }
}

pub fn tick_vitals(
    time: Res<Time>,
    rates: Res<VitalRates>,
    rest: Res<RestState>,
    mut vitals: ResMut<Vitals>,
) {
    if vitals.dead {
        return;
    }
    decay_vitals(&mut vitals, &rates, rest.resting, time.delta_secs());
}

pub fn handle_rest_toggle(
    mut rest_events: EventReader<RestToggleEvent>,
    mut rest: ResMut<RestState>,
) {
    for _ev in rest_events.read() {
        rest.resting = !rest.resting;
        info!(
            "Player: {}",
            if rest.resting { "sat down to rest" } else { "back on their feet" }
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Consumption and damage
// ═══════════════════════════════════════════════════════════════════════════

/// Apply the recovery of a consumed unit. Potions restore health and
/// thirst; food restores hunger. Authored stats at or below zero fall
/// back to the documented defaults.
pub fn handle_consume_item(
    mut consume_events: EventReader<ConsumeItemEvent>,
    item_registry: Res<ItemRegistry>,
    mut vitals: ResMut<Vitals>,
) {
    for event in consume_events.read() {
        let Some(def) = item_registry.get(&event.item_id) else {
            continue;
        };
        let recovery = def.recovery.unwrap_or_default();
        match def.category {
            ItemCategory::Potion => {
                let health = if recovery.health > 0.0 {
                    recovery.health
                } else {
                    DEFAULT_POTION_HEALTH
                };
                let thirst = if recovery.thirst > 0.0 {
                    recovery.thirst
                } else {
                    DEFAULT_POTION_THIRST
                };
                vitals.health = (vitals.health + health).min(MAX_VITAL);
                vitals.thirst = (vitals.thirst + thirst).min(MAX_VITAL);
            }
            ItemCategory::Food => {
                let hunger = if recovery.hunger > 0.0 {
                    recovery.hunger
                } else {
                    DEFAULT_FOOD_HUNGER
                };
                vitals.hunger = (vitals.hunger + hunger).min(MAX_VITAL);
            }
            _ => {}
        }
    }
}

pub fn apply_player_damage(
    mut damage_events: EventReader<PlayerDamageEvent>,
    mut vitals: ResMut<Vitals>,
) {
    for event in damage_events.read() {
        if vitals.dead {
            continue;
        }
        vitals.health = (vitals.health - event.amount).max(0.0);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Consequences
// ═══════════════════════════════════════════════════════════════════════════

/// An empty health, hunger, or thirst bar kills the player. An empty
/// fatigue bar only earns a warning, once per exhaustion.
pub fn check_vital_consequences(
    mut vitals: ResMut<Vitals>,
    mut died_events: EventWriter<PlayerDiedEvent>,
    mut exhaustion_warned: Local<bool>,
) {
    if vitals.dead {
        return;
    }

    if vitals.fatigue <= 0.0 {
        if !*exhaustion_warned {
            warn!("Player: exhausted, too tired to swing anything");
            *exhaustion_warned = true;
        }
    } else {
        *exhaustion_warned = false;
    }

    if vitals.depleted() {
        vitals.dead = true;
        died_events.send(PlayerDiedEvent);
        info!(
            "Player: died (health {:.0}, hunger {:.0}, thirst {:.0})",
            vitals.health, vitals.hunger, vitals.thirst
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decay_drains_at_documented_rates() {
        let mut vitals = Vitals::default();
        decay_vitals(&mut vitals, &VitalRates::default(), false, 10.0);
        assert_eq!(vitals.fatigue, MAX_VITAL - 1.0);
        assert_eq!(vitals.hunger, MAX_VITAL - 2.0);
        assert_eq!(vitals.thirst, MAX_VITAL - 3.0);
        assert_eq!(vitals.health, MAX_VITAL);
    }

    #[test]
    fn resting_suspends_decay_and_recovers_fatigue() {
        let mut vitals = Vitals {
            fatigue: 10.0,
            ..Default::default()
        };
        decay_vitals(&mut vitals, &VitalRates::default(), true, 2.0);
        assert_eq!(vitals.fatigue, 60.0);
        assert_eq!(vitals.hunger, MAX_VITAL);
        assert_eq!(vitals.thirst, MAX_VITAL);
    }

    #[test]
    fn rest_recovery_caps_at_full() {
        let mut vitals = Vitals {
            fatigue: 90.0,
            ..Default::default()
        };
        decay_vitals(&mut vitals, &VitalRates::default(), true, 30.0);
        assert_eq!(vitals.fatigue, MAX_VITAL);
    }

    #[test]
    fn exposure_scales_decay_and_drains_health() {
        let mut rates = VitalRates::default();
        rates.set_exposure(COLD_DECAY_SCALE, COLD_HEALTH_DRAIN_PER_SEC);

        let mut vitals = Vitals::default();
        decay_vitals(&mut vitals, &rates, false, 10.0);
        assert_eq!(vitals.hunger, MAX_VITAL - 4.0);
        assert_eq!(vitals.thirst, MAX_VITAL - 6.0);
        assert_eq!(vitals.health, MAX_VITAL - 5.0);
    }

    #[test]
    fn cold_drain_ignores_rest() {
        let mut rates = VitalRates::default();
        rates.set_exposure(COLD_DECAY_SCALE, COLD_HEALTH_DRAIN_PER_SEC);

        let mut vitals = Vitals::default();
        decay_vitals(&mut vitals, &rates, true, 4.0);
        assert_eq!(vitals.health, MAX_VITAL - 2.0);
        assert_eq!(vitals.hunger, MAX_VITAL);
    }

    #[test]
    fn bars_never_go_negative() {
        let mut vitals = Vitals {
            fatigue: 0.5,
            hunger: 0.5,
            thirst: 0.5,
            ..Default::default()
        };
        decay_vitals(&mut vitals, &VitalRates::default(), false, 1_000.0);
        assert_eq!(vitals.fatigue, 0.0);
        assert_eq!(vitals.hunger, 0.0);
        assert_eq!(vitals.thirst, 0.0);
        assert!(vitals.depleted());
    }
}
