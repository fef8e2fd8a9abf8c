use bevy::prelude::*;

use crate::shared::*;

use super::AttackCooldown;

/// Resolve a swing aimed at a world position.
///
/// An enemy inside reach is struck first; otherwise the cell under the
/// aim point takes harvest damage. Every landed swing costs fatigue,
/// hunger and thirst, and wears the active weapon down by its per-use
/// cost. Swinging the wrong tool at a tile does nothing and costs
/// nothing.
pub fn handle_attack_command(
    time: Res<Time>,
    mut attack_events: EventReader<AttackCommandEvent>,
    mut cooldown: ResMut<AttackCooldown>,
    mut vitals: ResMut<Vitals>,
    mut equipment: ResMut<Equipment>,
    mut inventory: ResMut<Inventory>,
    item_registry: Res<ItemRegistry>,
    tile_registry: Res<TileRegistry>,
    grid: Res<ResourceGrid>,
    player: Query<&Transform, With<Player>>,
    enemies: Query<(Entity, &Transform), With<Enemy>>,
    mut struck_events: EventWriter<EnemyStruckEvent>,
    mut tile_events: EventWriter<TileDamageEvent>,
    mut changed_events: EventWriter<InventoryChangedEvent>,
    mut switched_events: EventWriter<WeaponSwitchedEvent>,
) {
    cooldown.timer.tick(time.delta());

    // Latest command wins; spamming inside the cooldown is dropped.
    let Some(command) = attack_events.read().last() else {
        return;
    };
    if vitals.dead || !cooldown.timer.finished() {
        return;
    }
    let Ok(player_transform) = player.get_single() else {
        return;
    };
    cooldown.timer.reset();

    let origin = player_transform.translation.truncate();
    let aim = sanitize_vec2(command.aim);

    let armed = equipment.active_weapon().map(|w| w.item_id.clone());
    let weapon_def = armed.as_deref().and_then(|id| item_registry.get(id));
    let range = weapon_def
        .map(|d| d.attack_range())
        .unwrap_or(DEFAULT_ATTACK_RANGE);

    // ── Enemies first ──
    let target = enemies
        .iter()
        .filter(|(_, tf)| tf.translation.truncate().distance(origin) <= range)
        .min_by(|(_, a), (_, b)| {
            a.translation
                .truncate()
                .distance_squared(aim)
                .total_cmp(&b.translation.truncate().distance_squared(aim))
        });
    if let Some((entity, _)) = target {
        let damage = weapon_def.map(|d| d.attack_power()).unwrap_or(UNARMED_DAMAGE);
        struck_events.send(EnemyStruckEvent {
            target: entity,
            amount: damage,
        });
        spend_swing(&mut vitals);
        if armed.is_some() {
            wear_active_weapon(
                &mut equipment,
                &mut inventory,
                &item_registry,
                &mut changed_events,
                &mut switched_events,
            );
        }
        return;
    }

    // ── Then the tile under the aim point ──
    let cell = CellPos::from_world(aim);
    let Some(live) = grid.tile_at(&cell) else {
        return;
    };
    let Some(tile_def) = tile_registry.get(&live.tile_id) else {
        return;
    };
    if origin.distance(cell.world_center()) > range || origin.distance(aim) > range {
        return;
    }

    // Plants come down in one bare-handed strike, no wear.
    if tile_def.harvest_without_tool {
        tile_events.send(TileDamageEvent {
            cell,
            amount: tile_def.max_health,
        });
        spend_swing(&mut vitals);
        return;
    }

    let Some(def) = weapon_def else {
        return;
    };
    let efficiency = def.harvest_efficiency(tile_def.resource);
    if efficiency <= 0.0 {
        return;
    }

    let mut damage = def.attack_power() * efficiency;
    if def.instant_harvest == Some(tile_def.resource) {
        damage = damage.max(tile_def.max_health);
    }
    tile_events.send(TileDamageEvent { cell, amount: damage });
    spend_swing(&mut vitals);
    wear_active_weapon(
        &mut equipment,
        &mut inventory,
        &item_registry,
        &mut changed_events,
        &mut switched_events,
    );
}

/// Stat cost of a landed swing.
fn spend_swing(vitals: &mut Vitals) {
    vitals.fatigue = (vitals.fatigue - ATTACK_FATIGUE_COST).max(0.0);
    vitals.hunger = (vitals.hunger - ATTACK_HUNGER_COST).max(0.0);
    vitals.thirst = (vitals.thirst - ATTACK_THIRST_COST).max(0.0);
}

/// Wear the active weapon by its per-use cost. A broken weapon goes back
/// into the bag as one unit and the other hand takes over.
fn wear_active_weapon(
    equipment: &mut Equipment,
    inventory: &mut Inventory,
    item_registry: &ItemRegistry,
    changed_events: &mut EventWriter<InventoryChangedEvent>,
    switched_events: &mut EventWriter<WeaponSwitchedEvent>,
) {
    let Some(hand) = equipment.active else {
        return;
    };
    let per_use = equipment
        .weapon(hand)
        .and_then(|w| item_registry.get(&w.item_id))
        .map(|d| d.durability_per_use())
        .unwrap_or(0.0);
    let Some(broken) = equipment.apply_wear(hand, per_use) else {
        return;
    };

    info!("Player: {} wore out", broken.item_id);
    if let Some(def) = item_registry.get(&broken.item_id) {
        if !inventory.add(def, 1) {
            warn!("Player: bag full, worn-out {} lost", broken.item_id);
        }
        changed_events.send(InventoryChangedEvent);
    }
    switched_events.send(WeaponSwitchedEvent {
        item_id: equipment.active_item_id(),
    });
}
