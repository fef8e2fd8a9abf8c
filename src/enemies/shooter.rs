//! Shooter patrollers: ranged fire when the player is too far to bite.

use bevy::prelude::*;

use crate::shared::*;

/// Fire when the player is inside this range but outside melee reach.
const SHOOT_RANGE: f32 = 3.0;
/// Seconds between shots.
const FIRE_INTERVAL_SECS: f32 = 1.0;
const PROJECTILE_SPEED: f32 = 5.0;
const PROJECTILE_DAMAGE: f32 = 10.0;
const PROJECTILE_LIFETIME_SECS: f32 = 5.0;
/// How close a projectile must pass to connect.
const PROJECTILE_HIT_RADIUS: f32 = 0.5;

/// Per-shooter fire cooldown. Starts ready.
#[derive(Component, Debug)]
pub struct ShootTimer {
    pub timer: Timer,
}

impl Default for ShootTimer {
    fn default() -> Self {
        let mut timer = Timer::from_seconds(FIRE_INTERVAL_SECS, TimerMode::Once);
        timer.tick(timer.duration());
        Self { timer }
    }
}

#[derive(Component, Debug)]
pub struct Projectile {
    pub velocity: Vec2,
    pub damage: f32,
    pub lifetime: Timer,
}

/// Fire at the player while they sit in the ring between melee reach and
/// shoot range.
pub fn fire_projectiles(
    mut commands: Commands,
    time: Res<Time>,
    vitals: Res<Vitals>,
    player: Query<&Transform, (With<Player>, Without<Enemy>)>,
    mut shooters: Query<(&Enemy, &Transform, &mut ShootTimer)>,
) {
    let Ok(player_transform) = player.get_single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (enemy, transform, mut shoot) in shooters.iter_mut() {
        shoot.timer.tick(time.delta());
        if !shoot.timer.finished() || vitals.dead {
            continue;
        }

        let pos = transform.translation.truncate();
        let dist = pos.distance(player_pos);
        if dist > SHOOT_RANGE || dist <= enemy.attack_range {
            continue;
        }
        let dir = (sanitize_vec2(player_pos) - pos).normalize_or_zero();
        if dir == Vec2::ZERO {
            continue;
        }

        shoot.timer.reset();
        commands.spawn((
            Projectile {
                velocity: dir * PROJECTILE_SPEED,
                damage: PROJECTILE_DAMAGE,
                lifetime: Timer::from_seconds(PROJECTILE_LIFETIME_SECS, TimerMode::Once),
            },
            Transform::from_translation(pos.extend(0.0)),
        ));
    }
}

/// Fly projectiles forward; connect with the player or fizzle out.
pub fn tick_projectiles(
    mut commands: Commands,
    time: Res<Time>,
    mut projectiles: Query<(Entity, &mut Projectile, &mut Transform), Without<Player>>,
    player: Query<&Transform, With<Player>>,
    mut damage_events: EventWriter<PlayerDamageEvent>,
) {
    let player_pos = player
        .get_single()
        .ok()
        .map(|tf| tf.translation.truncate());
    let dt = time.delta_secs();

    for (entity, mut projectile, mut transform) in projectiles.iter_mut() {
        transform.translation.x += projectile.velocity.x * dt;
        transform.translation.y += projectile.velocity.y * dt;
        projectile.lifetime.tick(time.delta());

        let hit = player_pos
            .map(|p| p.distance(transform.translation.truncate()) <= PROJECTILE_HIT_RADIUS)
            .unwrap_or(false);
        if hit {
            damage_events.send(PlayerDamageEvent {
                amount: projectile.damage,
            });
            commands.entity(entity).despawn();
            continue;
        }
        if projectile.lifetime.finished() {
            commands.entity(entity).despawn();
        }
    }
}
