//! Map data definitions for both game areas.
//!
//! Each map authors its destructible resource cells and its respawn
//! pillars. Enemy placements live with the enemies domain, keyed by
//! `MapId`.

use bevy::prelude::*;

use crate::shared::*;

/// Complete definition of a game map.
#[derive(Debug, Clone)]
pub struct MapDef {
    pub id: MapId,
    /// Destructible resource placements: which tile sits on which cell.
    pub resources: Vec<(CellPos, TileId)>,
    /// Respawn pillar positions.
    pub anchors: Vec<Vec2>,
}

// ═══════════════════════════════════════════════════════════════════════
// MAP GENERATORS
// ═══════════════════════════════════════════════════════════════════════

pub fn generate_map(map_id: MapId) -> MapDef {
    match map_id {
        MapId::Basecamp => generate_basecamp(),
        MapId::Tundra => generate_tundra(),
    }
}

/// Place one tile kind on a row of cells.
fn place_row(resources: &mut Vec<(CellPos, TileId)>, tile_id: &str, y: i32, xs: &[i32]) {
    for &x in xs {
        resources.push((CellPos::new(x, y, 0), tile_id.to_string()));
    }
}

// ---------------------------------------------------------------------------
// Basecamp: the safe starting clearing. Forage and light timber around a
// campfire; respawn pillars near the center.
// ---------------------------------------------------------------------------
fn generate_basecamp() -> MapDef {
    let mut resources = Vec::new();

    // Tree line along the north edge
    place_row(&mut resources, "pine_tree", 9, &[-8, -6, -4, -2, 0, 2, 4, 6, 8]);
    place_row(&mut resources, "pine_tree", 8, &[-7, -3, 3, 7]);

    // Scattered boulders on the west side
    place_row(&mut resources, "boulder", 2, &[-8, -6]);
    place_row(&mut resources, "boulder", -1, &[-7]);
    place_row(&mut resources, "boulder", -4, &[-8, -5]);

    // Forage patch south of camp
    place_row(&mut resources, "grass_tuft", -5, &[-2, -1, 0, 1, 2]);
    place_row(&mut resources, "grass_tuft", -6, &[-1, 0, 1]);
    place_row(&mut resources, "berry_bush", -7, &[-3, 0, 3]);

    // A couple of berry bushes by the eastern path
    place_row(&mut resources, "berry_bush", 1, &[6, 8]);

    MapDef {
        id: MapId::Basecamp,
        resources,
        anchors: vec![Vec2::new(0.5, 0.5), Vec2::new(5.5, -2.5)],
    }
}

// ---------------------------------------------------------------------------
// Tundra: the frozen expanse east of camp. Denser timber, ore, and the
// things that guard it. One pillar by the entrance.
// ---------------------------------------------------------------------------
fn generate_tundra() -> MapDef {
    let mut resources = Vec::new();

    // Frost pine stands
    place_row(&mut resources, "frost_pine", 6, &[2, 4, 6, 10, 12]);
    place_row(&mut resources, "frost_pine", 4, &[3, 7, 11, 15]);
    place_row(&mut resources, "frost_pine", -3, &[5, 8, 13]);
    place_row(&mut resources, "frost_pine", -5, &[4, 9, 14, 16]);

    // Ice boulders along the frozen creek
    place_row(&mut resources, "ice_boulder", 0, &[6, 7, 12]);
    place_row(&mut resources, "ice_boulder", 1, &[9, 10]);

    // Iron veins in the rock face at the far end
    place_row(&mut resources, "iron_vein", 2, &[17, 18]);
    place_row(&mut resources, "iron_vein", -1, &[18, 19]);
    place_row(&mut resources, "iron_vein", -4, &[17]);

    // Hardy shrubs near the entrance
    place_row(&mut resources, "grass_tuft", 1, &[2, 3]);
    place_row(&mut resources, "berry_bush", -2, &[3]);

    MapDef {
        id: MapId::Tundra,
        resources,
        anchors: vec![Vec2::new(1.5, 0.5)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_map_generates() {
        for id in [MapId::Basecamp, MapId::Tundra] {
            let def = generate_map(id);
            assert_eq!(def.id, id);
            assert!(!def.resources.is_empty());
            assert!(!def.anchors.is_empty());
        }
    }

    #[test]
    fn no_doubled_cells() {
        for id in [MapId::Basecamp, MapId::Tundra] {
            let def = generate_map(id);
            let mut seen = std::collections::HashSet::new();
            for (cell, _) in &def.resources {
                assert!(seen.insert(*cell), "{:?} authored twice on {:?}", cell, id);
            }
        }
    }
}
