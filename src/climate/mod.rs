//! Climate domain: snow exposure and blizzards. Only the tundra has
//! weather worth modeling; the basecamp sits in the lee of the ridge.

use bevy::prelude::*;

use crate::shared::*;

pub struct ClimatePlugin;

impl Plugin for ClimatePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BlizzardCycle>();
        app.add_systems(
            Update,
            (apply_exposure, tick_blizzards).run_if(in_state(GameState::Playing)),
        );
    }
}

/// Blizzard scheduling: one rolls in every interval and blows for its
/// duration.
#[derive(Resource, Debug)]
pub struct BlizzardCycle {
    pub interval: Timer,
    pub active: Option<Timer>,
}

impl Default for BlizzardCycle {
    fn default() -> Self {
        Self {
            interval: Timer::from_seconds(BLIZZARD_INTERVAL_SECS, TimerMode::Once),
            active: None,
        }
    }
}

impl BlizzardCycle {
    pub fn blowing(&self) -> bool {
        self.active.is_some()
    }
}

/// Missing an outer shirt or shoes on the tundra drains health and
/// doubles hunger/thirst decay. Dressing up (or walking home) clears the
/// exposure rates.
fn apply_exposure(
    current_map: Res<CurrentMap>,
    equipment: Res<Equipment>,
    mut rates: ResMut<VitalRates>,
    mut was_exposed: Local<bool>,
) {
    let underdressed = equipment.gear_piece(GearSlot::OuterShirt).is_none()
        || equipment.gear_piece(GearSlot::Shoes).is_none();
    let exposed = current_map.id == MapId::Tundra && underdressed;

    if exposed {
        rates.set_exposure(COLD_DECAY_SCALE, COLD_HEALTH_DRAIN_PER_SEC);
    } else {
        rates.clear_exposure();
    }

    if exposed != *was_exposed {
        *was_exposed = exposed;
        if exposed {
            info!("Climate: the cold bites through missing layers");
        } else {
            info!("Climate: exposure over");
        }
    }
}

/// Run the blizzard clock while on the tundra. A blizzard halves the
/// player's movement speed until it passes. Leaving the map ends the
/// storm and rewinds the clock.
fn tick_blizzards(
    time: Res<Time>,
    current_map: Res<CurrentMap>,
    mut cycle: ResMut<BlizzardCycle>,
    mut speed: ResMut<PlayerSpeed>,
) {
    if current_map.id != MapId::Tundra {
        if cycle.active.take().is_some() {
            speed.modifier = 1.0;
        }
        cycle.interval.reset();
        return;
    }

    cycle.interval.tick(time.delta());
    if cycle.interval.finished() && cycle.active.is_none() {
        // Reset at storm start so the next one keeps the full cadence.
        cycle.interval.reset();
        cycle.active = Some(Timer::from_seconds(
            BLIZZARD_DURATION_SECS,
            TimerMode::Once,
        ));
        speed.modifier = BLIZZARD_SPEED_FACTOR;
        info!("Climate: a blizzard rolls in");
    }

    if let Some(active) = cycle.active.as_mut() {
        active.tick(time.delta());
        if active.finished() {
            cycle.active = None;
            speed.modifier = 1.0;
            info!("Climate: the blizzard passes");
        }
    }
}
