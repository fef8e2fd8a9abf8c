//! Enemies domain: patrolling and shooting hostiles, their loot, and the
//! spawners that bring them back.

pub mod patrol;
pub mod shooter;

use bevy::prelude::*;
use rand::prelude::*;

use crate::shared::*;

use patrol::{AttackTimer, PatrolRoute};
use shooter::{Projectile, ShootTimer};

pub struct EnemiesPlugin;

impl Plugin for EnemiesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                rebuild_spawners_on_map_load,
                patrol::patrol_and_chase,
                patrol::melee_attack,
                shooter::fire_projectiles,
                shooter::tick_projectiles,
                apply_enemy_strikes,
                tick_spawners,
            )
                .run_if(in_state(GameState::Playing)),
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SPAWN TABLES
// ═══════════════════════════════════════════════════════════════════════

/// An authored enemy placement.
struct EnemySpawnDef {
    archetype: EnemyArchetype,
    pos: Vec2,
    /// Patrol axis: true = east-west.
    horizontal: bool,
}

fn spawn_def(archetype: EnemyArchetype, x: f32, y: f32, horizontal: bool) -> EnemySpawnDef {
    EnemySpawnDef {
        archetype,
        pos: Vec2::new(x, y),
        horizontal,
    }
}

/// Enemy placements per map. The basecamp is safe ground.
fn spawn_table(map: MapId) -> Vec<EnemySpawnDef> {
    match map {
        MapId::Basecamp => Vec::new(),
        MapId::Tundra => vec![
            spawn_def(EnemyArchetype::Patroller, 6.5, 2.5, true),
            spawn_def(EnemyArchetype::Patroller, 11.5, -2.5, false),
            spawn_def(EnemyArchetype::Patroller, 14.5, 3.5, true),
            spawn_def(EnemyArchetype::Shooter, 17.5, 0.5, false),
        ],
    }
}

// ═══════════════════════════════════════════════════════════════════════
// COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

/// Owns one enemy; re-arms a respawn countdown when it dies. A fresh
/// death replaces any countdown already running.
#[derive(Component, Debug)]
pub struct EnemySpawner {
    pub archetype: EnemyArchetype,
    pub pos: Vec2,
    pub horizontal: bool,
    pub alive: Option<Entity>,
    pub respawn: Option<Timer>,
}

// ═══════════════════════════════════════════════════════════════════════
// SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

fn spawn_enemy(
    commands: &mut Commands,
    archetype: EnemyArchetype,
    pos: Vec2,
    horizontal: bool,
) -> Entity {
    let mut entity = commands.spawn((
        Enemy::new(archetype, pos),
        PatrolRoute::new(pos, horizontal),
        AttackTimer::default(),
        Transform::from_translation(pos.extend(0.0)),
    ));
    if archetype == EnemyArchetype::Shooter {
        entity.insert(ShootTimer::default());
    }
    entity.id()
}

/// Replace the previous map's enemies and spawners with the new map's.
fn rebuild_spawners_on_map_load(
    mut commands: Commands,
    mut loaded_events: EventReader<MapLoadedEvent>,
    enemies: Query<Entity, With<Enemy>>,
    projectiles: Query<Entity, With<Projectile>>,
    spawners: Query<Entity, With<EnemySpawner>>,
) {
    for event in loaded_events.read() {
        for entity in enemies.iter().chain(projectiles.iter()).chain(spawners.iter()) {
            commands.entity(entity).despawn();
        }

        let table = spawn_table(event.map);
        let count = table.len();
        for def in table {
            let alive = spawn_enemy(&mut commands, def.archetype, def.pos, def.horizontal);
            commands.spawn(EnemySpawner {
                archetype: def.archetype,
                pos: def.pos,
                horizontal: def.horizontal,
                alive: Some(alive),
                respawn: None,
            });
        }
        if count > 0 {
            info!("Enemies: {} spawned on {:?}", count, event.map);
        }
    }
}

/// Apply player strikes. A kill rolls the loot table, scatters the drops
/// where the enemy stood, and arms the owning spawner.
fn apply_enemy_strikes(
    mut commands: Commands,
    mut struck_events: EventReader<EnemyStruckEvent>,
    mut enemies: Query<(&mut Enemy, &Transform)>,
    mut spawners: Query<&mut EnemySpawner>,
    mut drop_events: EventWriter<SpawnDropEvent>,
) {
    for event in struck_events.read() {
        let Ok((mut enemy, transform)) = enemies.get_mut(event.target) else {
            continue;
        };
        // The despawn is deferred, so a target dropped by an earlier
        // event this frame is still queryable. It only dies once.
        if enemy.health <= 0.0 {
            continue;
        }
        enemy.health -= event.amount;
        if enemy.health > 0.0 {
            continue;
        }

        let pos = transform.translation.truncate();
        for (item_id, quantity) in roll_loot(enemy.archetype) {
            drop_events.send(SpawnDropEvent {
                item_id,
                quantity,
                pos,
            });
        }
        commands.entity(event.target).despawn();
        info!("Enemies: {:?} died at ({:.1}, {:.1})", enemy.archetype, pos.x, pos.y);

        for mut spawner in spawners.iter_mut() {
            if spawner.alive == Some(event.target) {
                spawner.alive = None;
                spawner.respawn = Some(Timer::from_seconds(
                    ENEMY_RESPAWN_DELAY_SECS,
                    TimerMode::Once,
                ));
            }
        }
    }
}

/// Count down armed spawners and bring their enemy back.
fn tick_spawners(
    mut commands: Commands,
    time: Res<Time>,
    mut spawners: Query<&mut EnemySpawner>,
) {
    for mut spawner in spawners.iter_mut() {
        let Some(timer) = spawner.respawn.as_mut() else {
            continue;
        };
        timer.tick(time.delta());
        if !timer.finished() {
            continue;
        }

        spawner.respawn = None;
        let alive = spawn_enemy(
            &mut commands,
            spawner.archetype,
            spawner.pos,
            spawner.horizontal,
        );
        spawner.alive = Some(alive);
        info!("Enemies: {:?} respawned", spawner.archetype);
    }
}

/// Per-entry loot rolls. Every entry gets its own chance; an unlucky
/// kill can drop nothing at all.
fn roll_loot(archetype: EnemyArchetype) -> Vec<(ItemId, u32)> {
    let mut rng = rand::thread_rng();
    let table: &[(&str, f64, u32, u32)] = match archetype {
        EnemyArchetype::Patroller => &[
            ("dried_meat", 0.6, 1, 2),
            ("grass_fiber", 0.4, 1, 3),
        ],
        EnemyArchetype::Shooter => &[
            ("ice_shard", 0.5, 1, 2),
            ("stone", 0.5, 1, 2),
            ("herbal_potion", 0.25, 1, 1),
        ],
    };

    let mut loot = Vec::new();
    for (item_id, chance, min, max) in table {
        if rng.gen_bool(*chance) {
            loot.push((item_id.to_string(), rng.gen_range(*min..=*max)));
        }
    }
    loot
}
