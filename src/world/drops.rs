//! Loose item pickups: spawned with a little scatter toss, collected on
//! player contact or when their lifetime runs out.

use bevy::prelude::*;
use rand::Rng;

use crate::shared::*;

/// A loose item lying in the world.
#[derive(Component, Debug)]
pub struct DroppedItem {
    pub item_id: ItemId,
    pub quantity: u32,
    pub velocity: Vec2,
    /// Where the toss settles: one unit below the spawn height.
    pub ground_y: f32,
    pub lifetime: Timer,
}

/// Turn drop requests into pickup entities, one per unit. With pickup
/// spawning disabled the yield goes straight into the bag instead.
pub fn handle_spawn_drops(
    mut commands: Commands,
    mut drop_events: EventReader<SpawnDropEvent>,
    settings: Res<DropSettings>,
    mut pickup_events: EventWriter<ItemPickupEvent>,
) {
    let mut rng = rand::thread_rng();

    for event in drop_events.read() {
        if event.quantity == 0 {
            continue;
        }
        if !settings.spawn_pickups {
            pickup_events.send(ItemPickupEvent {
                item_id: event.item_id.clone(),
                quantity: event.quantity,
            });
            continue;
        }

        let pos = sanitize_vec2(event.pos);
        for _ in 0..event.quantity {
            let velocity = Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(0.5..=1.5));
            commands.spawn((
                DroppedItem {
                    item_id: event.item_id.clone(),
                    quantity: 1,
                    velocity,
                    ground_y: pos.y - 1.0,
                    lifetime: Timer::from_seconds(DROP_LIFETIME_SECS, TimerMode::Once),
                },
                Transform::from_translation(pos.extend(0.0)),
            ));
        }
    }
}

/// Toss physics and collection. Gravity pulls the drop to its ground
/// line while the sideways component damps out; after that it sits
/// still until the player walks into it or the auto-collect timer fires.
pub fn tick_drops(
    mut commands: Commands,
    time: Res<Time>,
    mut drops: Query<(Entity, &mut DroppedItem, &mut Transform), Without<Player>>,
    player: Query<&Transform, With<Player>>,
    mut pickup_events: EventWriter<ItemPickupEvent>,
) {
    let player_pos = player
        .get_single()
        .ok()
        .map(|tf| tf.translation.truncate());
    let dt = time.delta_secs();

    for (entity, mut drop, mut transform) in drops.iter_mut() {
        if transform.translation.y > drop.ground_y {
            drop.velocity.y -= DROP_GRAVITY * dt;
            drop.velocity.x *= DROP_X_DAMPING;
            transform.translation.x += drop.velocity.x * dt;
            transform.translation.y += drop.velocity.y * dt;
            if transform.translation.y < drop.ground_y {
                transform.translation.y = drop.ground_y;
            }
        }

        drop.lifetime.tick(time.delta());
        let contact = player_pos
            .map(|p| p.distance(transform.translation.truncate()) <= PICKUP_RANGE)
            .unwrap_or(false);
        if drop.lifetime.finished() || contact {
            pickup_events.send(ItemPickupEvent {
                item_id: drop.item_id.clone(),
                quantity: drop.quantity,
            });
            commands.entity(entity).despawn();
        }
    }
}
