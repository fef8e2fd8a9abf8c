//! Patrol routes, axis-locked chasing, and melee attacks.

use bevy::prelude::*;

use crate::shared::*;

/// Distance between the two endpoints of a patrol route.
pub const PATROL_DISTANCE: f32 = 2.0;
/// Pause at each endpoint before turning around.
const PATROL_WAIT_SECS: f32 = 1.0;
/// How close counts as "arrived" at an endpoint.
const ARRIVAL_THRESHOLD: f32 = 0.2;
/// Seconds between melee swings.
const MELEE_COOLDOWN_SECS: f32 = 1.0;

/// Two-point walking route anchored at the enemy's home.
#[derive(Component, Debug)]
pub struct PatrolRoute {
    pub points: [Vec2; 2],
    /// Endpoint currently walked toward.
    pub target: usize,
    pub wait: Timer,
    pub waiting: bool,
    /// Patrol axis: true = east-west, false = north-south.
    pub horizontal: bool,
}

impl PatrolRoute {
    pub fn new(home: Vec2, horizontal: bool) -> Self {
        let half = if horizontal {
            Vec2::new(PATROL_DISTANCE / 2.0, 0.0)
        } else {
            Vec2::new(0.0, PATROL_DISTANCE / 2.0)
        };
        Self {
            points: [home - half, home + half],
            target: 1,
            wait: Timer::from_seconds(PATROL_WAIT_SECS, TimerMode::Once),
            waiting: false,
            horizontal,
        }
    }
}

/// Per-enemy melee cooldown. Starts ready so contact bites immediately.
#[derive(Component, Debug)]
pub struct AttackTimer {
    pub timer: Timer,
}

impl Default for AttackTimer {
    fn default() -> Self {
        let mut timer = Timer::from_seconds(MELEE_COOLDOWN_SECS, TimerMode::Once);
        timer.tick(timer.duration());
        Self { timer }
    }
}

/// Step from `from` toward `to`, never overshooting. The goal is
/// sanitized first so a degenerate player position cannot drag an enemy
/// off the map.
pub fn step_towards(from: Vec2, to: Vec2, step: f32) -> Vec2 {
    let to = sanitize_vec2(to);
    let delta = to - from;
    if delta.length() <= step {
        to
    } else {
        from + delta.normalize() * step
    }
}

/// Walk the patrol route; chase the player along the patrol axis while
/// they are inside detection range, and go back to the route when they
/// leave it.
pub fn patrol_and_chase(
    time: Res<Time>,
    player: Query<&Transform, (With<Player>, Without<Enemy>)>,
    mut enemies: Query<(&mut Enemy, &mut PatrolRoute, &mut Transform), Without<Player>>,
) {
    let player_pos = player
        .get_single()
        .ok()
        .map(|tf| tf.translation.truncate());
    let dt = time.delta_secs();

    for (mut enemy, mut route, mut transform) in enemies.iter_mut() {
        let pos = transform.translation.truncate();

        // ── Chase ──
        if let Some(target) = player_pos {
            if pos.distance(target) <= enemy.detection_range {
                if pos.distance(target) <= enemy.attack_range {
                    // In reach: stand and face them, melee handles the rest.
                    enemy.facing = Facing::from_vec(target - pos);
                    continue;
                }
                let goal = if route.horizontal {
                    Vec2::new(target.x, pos.y)
                } else {
                    Vec2::new(pos.x, target.y)
                };
                let next = step_towards(pos, goal, enemy.chase_speed * dt);
                if next != pos {
                    enemy.facing = Facing::from_vec(next - pos);
                    transform.translation.x = next.x;
                    transform.translation.y = next.y;
                }
                continue;
            }
        }

        // ── Patrol ──
        if route.waiting {
            route.wait.tick(time.delta());
            if route.wait.finished() {
                route.wait.reset();
                route.waiting = false;
                route.target = 1 - route.target;
            }
            continue;
        }

        let goal = route.points[route.target];
        if pos.distance(goal) <= ARRIVAL_THRESHOLD {
            route.waiting = true;
            continue;
        }
        let next = step_towards(pos, goal, enemy.move_speed * dt);
        if next != pos {
            enemy.facing = Facing::from_vec(next - pos);
            transform.translation.x = next.x;
            transform.translation.y = next.y;
        }
    }
}

/// Swing at the player on cooldown whenever they are within reach.
pub fn melee_attack(
    time: Res<Time>,
    vitals: Res<Vitals>,
    player: Query<&Transform, (With<Player>, Without<Enemy>)>,
    mut enemies: Query<(&Enemy, &Transform, &mut AttackTimer)>,
    mut damage_events: EventWriter<PlayerDamageEvent>,
) {
    let Ok(player_transform) = player.get_single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (enemy, transform, mut attack) in enemies.iter_mut() {
        attack.timer.tick(time.delta());
        if !attack.timer.finished() || vitals.dead {
            continue;
        }
        if transform.translation.truncate().distance(player_pos) <= enemy.attack_range {
            attack.timer.reset();
            damage_events.send(PlayerDamageEvent {
                amount: enemy.attack_damage,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_endpoints_straddle_home() {
        let route = PatrolRoute::new(Vec2::new(4.0, -2.0), true);
        assert_eq!(route.points[0], Vec2::new(3.0, -2.0));
        assert_eq!(route.points[1], Vec2::new(5.0, -2.0));

        let vertical = PatrolRoute::new(Vec2::ZERO, false);
        assert_eq!(vertical.points[0], Vec2::new(0.0, -1.0));
        assert_eq!(vertical.points[1], Vec2::new(0.0, 1.0));
    }

    #[test]
    fn step_never_overshoots() {
        let from = Vec2::ZERO;
        let to = Vec2::new(10.0, 0.0);
        assert_eq!(step_towards(from, to, 3.0), Vec2::new(3.0, 0.0));
        assert_eq!(step_towards(from, Vec2::new(0.5, 0.0), 3.0), Vec2::new(0.5, 0.0));
    }

    #[test]
    fn step_shrugs_off_degenerate_goals() {
        let from = Vec2::new(2.0, 2.0);
        let next = step_towards(from, Vec2::new(f32::NAN, f32::INFINITY), 1.0);
        assert!(next.x.is_finite() && next.y.is_finite());

        // A NaN goal sanitizes to the origin, so the step heads there.
        assert!(next.distance(from) <= 1.0 + f32::EPSILON);
    }
}
