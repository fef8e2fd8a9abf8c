//! Data layer — populates all registries at game startup.
//!
//! This plugin runs in OnEnter(GameState::Loading), fills the
//! ItemRegistry and TileRegistry from the hard-coded game-design data
//! defined in submodules, then transitions the game into
//! GameState::Playing.
//!
//! No other domain needs to seed these resources. All domain plugins
//! can safely read them once GameState has advanced past Loading.

mod items;
mod tiles;

use bevy::prelude::*;

use crate::shared::*;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), load_all_data);
    }
}

/// Single system that populates every registry and then transitions to
/// Playing. Tiles reference items by string ID, so there is no hard
/// dependency on population order.
fn load_all_data(
    mut item_registry: ResMut<ItemRegistry>,
    mut tile_registry: ResMut<TileRegistry>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    info!("DataPlugin: populating registries…");

    items::populate_items(&mut item_registry);
    info!("  Items loaded: {}", item_registry.items.len());

    tiles::populate_tiles(&mut tile_registry);
    info!("  Tiles loaded: {}", tile_registry.tiles.len());

    next_state.set(GameState::Playing);
}
