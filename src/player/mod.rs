mod attack;
mod respawn;
mod spawn;
mod vitals;

use bevy::prelude::*;

use crate::shared::*;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        // -- Local resources --
        app.init_resource::<AttackCooldown>();
        app.init_resource::<respawn::PendingRespawn>();

        // -- Spawn player when we enter Playing --
        app.add_systems(OnEnter(GameState::Playing), spawn::spawn_player);

        // -- Systems that run every frame while Playing --
        app.add_systems(
            Update,
            (
                vitals::tick_vitals,
                vitals::handle_rest_toggle,
                vitals::handle_consume_item,
                vitals::apply_player_damage,
                // consequence check runs after everything that can move a bar
                vitals::check_vital_consequences
                    .after(vitals::tick_vitals)
                    .after(vitals::handle_consume_item)
                    .after(vitals::apply_player_damage),
                attack::handle_attack_command,
                respawn::drive_respawn,
            )
                .run_if(in_state(GameState::Playing)),
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Local resources (player-domain only)
// ═══════════════════════════════════════════════════════════════════════════

/// Cooldown timer between swings. Starts ready so the first swing is
/// never swallowed.
#[derive(Resource)]
pub struct AttackCooldown {
    pub timer: Timer,
}

impl Default for AttackCooldown {
    fn default() -> Self {
        let mut timer = Timer::from_seconds(ATTACK_COOLDOWN_SECS, TimerMode::Once);
        timer.tick(timer.duration());
        Self { timer }
    }
}
