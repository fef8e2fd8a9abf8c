use crate::shared::*;

/// Populate the TileRegistry with all destructible tile definitions.
///
/// Plants (grass, berry bushes) come down bare-handed in one strike;
/// everything else takes attack power scaled by the tool's harvest
/// efficiency for the tile's resource kind. Drop quantities roll
/// uniformly over the inclusive [min_drop, max_drop] range.
pub fn populate_tiles(registry: &mut TileRegistry) {
    let tiles: Vec<TileDef> = vec![
        TileDef {
            id: "grass_tuft".into(),
            name: "Grass Tuft".into(),
            resource: ResourceKind::Plant,
            max_health: 1.0,
            drop_item: Some("grass_fiber".into()),
            min_drop: 1,
            max_drop: 2,
            harvest_without_tool: true,
        },
        TileDef {
            id: "berry_bush".into(),
            name: "Berry Bush".into(),
            resource: ResourceKind::Plant,
            max_health: 1.0,
            drop_item: Some("berry".into()),
            min_drop: 1,
            max_drop: 3,
            harvest_without_tool: true,
        },
        TileDef {
            id: "pine_tree".into(),
            name: "Pine Tree".into(),
            resource: ResourceKind::Wood,
            max_health: 50.0,
            drop_item: Some("wood".into()),
            min_drop: 2,
            max_drop: 5,
            harvest_without_tool: false,
        },
        TileDef {
            id: "boulder".into(),
            name: "Boulder".into(),
            resource: ResourceKind::Stone,
            max_health: 60.0,
            drop_item: Some("stone".into()),
            min_drop: 2,
            max_drop: 4,
            harvest_without_tool: false,
        },
        TileDef {
            id: "iron_vein".into(),
            name: "Iron Vein".into(),
            resource: ResourceKind::Ore,
            max_health: 80.0,
            drop_item: Some("iron_ore".into()),
            min_drop: 1,
            max_drop: 3,
            harvest_without_tool: false,
        },
        TileDef {
            id: "frost_pine".into(),
            name: "Frost Pine".into(),
            resource: ResourceKind::Wood,
            max_health: 70.0,
            drop_item: Some("wood".into()),
            min_drop: 3,
            max_drop: 6,
            harvest_without_tool: false,
        },
        TileDef {
            id: "ice_boulder".into(),
            name: "Ice Boulder".into(),
            resource: ResourceKind::Stone,
            max_health: 40.0,
            drop_item: Some("ice_shard".into()),
            min_drop: 1,
            max_drop: 2,
            harvest_without_tool: false,
        },
    ];

    for tile in tiles {
        registry.tiles.insert(tile.id.clone(), tile);
    }
}
