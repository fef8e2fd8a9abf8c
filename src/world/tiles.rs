//! The destructible resource grid: rebuild on map load, damage, and
//! permanent destruction.

use bevy::prelude::*;
use rand::Rng;

use crate::shared::*;

use super::maps::MapDef;

/// Rebuild the grid from a map's authored cells. Cells whose destruction
/// flag is already 0 stay gone for good.
pub fn rebuild_grid(
    map_def: &MapDef,
    tile_registry: &TileRegistry,
    prefs: &PrefStore,
    grid: &mut ResourceGrid,
) {
    grid.cells.clear();
    for (cell, tile_id) in &map_def.resources {
        if prefs.get_int(&cell.pref_key(), 1) == 0 {
            continue;
        }
        let Some(def) = tile_registry.get(tile_id) else {
            warn!("World: map {:?} places unknown tile '{}'", map_def.id, tile_id);
            continue;
        };
        grid.cells.insert(
            *cell,
            LiveTile {
                tile_id: tile_id.clone(),
                health: def.max_health,
            },
        );
    }
}

/// Apply incoming tile damage. A tile at or below zero health is
/// destroyed: its drop quantity is rolled, the cell leaves the grid, and
/// its flag is written so the destruction survives map reloads. Damage
/// aimed at an unregistered cell does nothing.
pub fn apply_tile_damage(
    mut damage_events: EventReader<TileDamageEvent>,
    mut grid: ResMut<ResourceGrid>,
    tile_registry: Res<TileRegistry>,
    mut prefs: ResMut<PrefStore>,
    mut drop_events: EventWriter<SpawnDropEvent>,
    mut destroyed_events: EventWriter<TileDestroyedEvent>,
) {
    let mut rng = rand::thread_rng();

    for event in damage_events.read() {
        let Some(live) = grid.cells.get_mut(&event.cell) else {
            continue;
        };
        live.health -= event.amount;
        if live.health > 0.0 {
            continue;
        }

        let tile_id = live.tile_id.clone();
        grid.cells.remove(&event.cell);
        prefs.set_int(&event.cell.pref_key(), 0);

        if let Some(def) = tile_registry.get(&tile_id) {
            if let Some(item_id) = &def.drop_item {
                let quantity = rng.gen_range(def.min_drop..=def.max_drop);
                if quantity > 0 {
                    drop_events.send(SpawnDropEvent {
                        item_id: item_id.clone(),
                        quantity,
                        pos: event.cell.world_center(),
                    });
                }
            }
        }

        destroyed_events.send(TileDestroyedEvent {
            cell: event.cell,
            tile_id: tile_id.clone(),
        });
        info!("World: {} at {:?} destroyed", tile_id, event.cell);
    }
}
