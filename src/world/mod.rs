//! World domain plugin for Frostreach.
//!
//! Responsible for:
//! - Authored map definitions and map transitions
//! - The destructible resource grid, rebuilt per map
//! - Tile damage, drop rolls, and destruction persistence
//! - Dropped-item pickups scattered into the world

use bevy::prelude::*;

use crate::shared::*;

pub mod drops;
pub mod maps;
pub mod tiles;

use maps::generate_map;

// ═══════════════════════════════════════════════════════════════════════
// PLUGIN
// ═══════════════════════════════════════════════════════════════════════

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_initial_map)
            .add_systems(
                Update,
                (
                    handle_map_transition,
                    tiles::apply_tile_damage,
                    drops::handle_spawn_drops,
                    drops::tick_drops,
                )
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// MAP LOADING
// ═══════════════════════════════════════════════════════════════════════

/// Load a map: rebuild the resource grid from its authored cells (minus
/// the ones destroyed in past sessions) and publish the respawn pillars.
fn load_map(
    map_id: MapId,
    grid: &mut ResourceGrid,
    anchors: &mut RespawnAnchors,
    current_map: &mut CurrentMap,
    tile_registry: &TileRegistry,
    prefs: &PrefStore,
    loaded_events: &mut EventWriter<MapLoadedEvent>,
) {
    let map_def = generate_map(map_id);

    current_map.id = map_id;
    anchors.points = map_def.anchors.clone();
    tiles::rebuild_grid(&map_def, tile_registry, prefs, grid);

    loaded_events.send(MapLoadedEvent { map: map_id });
    info!(
        "World: loaded {:?} with {} resource tiles",
        map_id,
        grid.cells.len()
    );
}

/// Build the starting map once gameplay begins.
fn spawn_initial_map(
    mut grid: ResMut<ResourceGrid>,
    mut anchors: ResMut<RespawnAnchors>,
    mut current_map: ResMut<CurrentMap>,
    tile_registry: Res<TileRegistry>,
    prefs: Res<PrefStore>,
    mut loaded_events: EventWriter<MapLoadedEvent>,
) {
    let initial = current_map.id;
    load_map(
        initial,
        &mut grid,
        &mut anchors,
        &mut current_map,
        &tile_registry,
        &prefs,
        &mut loaded_events,
    );
}

/// Handle `MapTransitionEvent`: clear the old map's loose drops and
/// rebuild the grid for the new one.
fn handle_map_transition(
    mut commands: Commands,
    mut transition_events: EventReader<MapTransitionEvent>,
    loose_drops: Query<Entity, With<drops::DroppedItem>>,
    mut grid: ResMut<ResourceGrid>,
    mut anchors: ResMut<RespawnAnchors>,
    mut current_map: ResMut<CurrentMap>,
    tile_registry: Res<TileRegistry>,
    prefs: Res<PrefStore>,
    mut loaded_events: EventWriter<MapLoadedEvent>,
) {
    for event in transition_events.read() {
        // Don't transition to the same map.
        if event.to_map == current_map.id {
            continue;
        }

        for entity in loose_drops.iter() {
            commands.entity(entity).despawn();
        }

        load_map(
            event.to_map,
            &mut grid,
            &mut anchors,
            &mut current_map,
            &tile_registry,
            &prefs,
            &mut loaded_events,
        );
    }
}
