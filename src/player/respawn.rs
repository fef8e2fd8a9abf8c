use bevy::prelude::*;

use crate::shared::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum RespawnPhase {
    #[default]
    Idle,
    AwaitingMap,
    Place,
}

/// Where the respawn sequence currently stands. A fresh death restarts
/// the sequence instead of stacking a second one behind it.
#[derive(Resource, Debug, Default)]
pub struct PendingRespawn {
    phase: RespawnPhase,
}

/// Walk the respawn sequence: get back to basecamp, wait for its grid,
/// then place the player at the nearest pillar with full vitals and
/// empty hands.
pub fn drive_respawn(
    mut died_events: EventReader<PlayerDiedEvent>,
    mut loaded_events: EventReader<MapLoadedEvent>,
    mut pending: ResMut<PendingRespawn>,
    current_map: Res<CurrentMap>,
    anchors: Res<RespawnAnchors>,
    mut map_events: EventWriter<MapTransitionEvent>,
    mut vitals: ResMut<Vitals>,
    mut inventory: ResMut<Inventory>,
    mut equipment: ResMut<Equipment>,
    mut changed_events: EventWriter<InventoryChangedEvent>,
    mut switched_events: EventWriter<WeaponSwitchedEvent>,
    mut player: Query<&mut Transform, With<Player>>,
) {
    if died_events.read().last().is_some() {
        if current_map.id == MapId::Basecamp {
            pending.phase = RespawnPhase::Place;
        } else {
            map_events.send(MapTransitionEvent {
                to_map: MapId::Basecamp,
            });
            pending.phase = RespawnPhase::AwaitingMap;
        }
    }

    if pending.phase == RespawnPhase::AwaitingMap
        && loaded_events.read().any(|ev| ev.map == MapId::Basecamp)
    {
        pending.phase = RespawnPhase::Place;
    }

    if pending.phase != RespawnPhase::Place {
        return;
    }
    // No player entity yet: hold the phase and place next frame.
    let Ok(mut transform) = player.get_single_mut() else {
        return;
    };

    let anchor = anchors.nearest(Vec2::ZERO);
    transform.translation.x = anchor.x;
    transform.translation.y = anchor.y;

    vitals.reset();
    inventory.clear();
    // The board wipe forfeits any backpack, so its capacity grant goes
    // with it. The bag was just emptied, so the shrink applies in full.
    let stale_bonus: u32 = equipment.gear.iter().flatten().map(|p| p.slot_bonus).sum();
    if stale_bonus > 0 {
        inventory.adjust_capacity(-(stale_bonus as i32));
    }
    changed_events.send(InventoryChangedEvent);
    equipment.clear();
    switched_events.send(WeaponSwitchedEvent { item_id: None });

    pending.phase = RespawnPhase::Idle;
    info!("Player: respawned at ({:.1}, {:.1})", anchor.x, anchor.y);
}
