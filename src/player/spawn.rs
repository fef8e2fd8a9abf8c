use bevy::prelude::*;

use crate::shared::*;

/// Spawn the player entity at the nearest respawn pillar (the origin on
/// maps without one). Runs once on `OnEnter(GameState::Playing)`.
pub fn spawn_player(
    mut commands: Commands,
    anchors: Res<RespawnAnchors>,
    existing: Query<Entity, With<Player>>,
) {
    // Guard: don't double-spawn if returning to Playing state.
    if !existing.is_empty() {
        return;
    }

    let pos = anchors.nearest(Vec2::ZERO);
    commands.spawn((
        Player,
        Transform::from_translation(Vec3::new(pos.x, pos.y, 0.0)),
    ));
    info!("Player: spawned at ({:.1}, {:.1})", pos.x, pos.y);
}
