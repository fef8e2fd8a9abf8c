//! Equipment domain: the weapon hands and the gear board.
//!
//! Equipping moves units out of the bag (the inventory side already
//! removed them before sending `EquipItemEvent`); unequipping puts one
//! unit back. Anything displaced by an overwrite is discarded with a
//! warning. Backpacks are the one gear piece with a side effect: their
//! slot bonus is applied to the bag on equip and released on unequip.

use bevy::prelude::*;

use crate::shared::*;

pub struct EquipmentPlugin;

impl Plugin for EquipmentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                handle_equip_item,
                handle_switch_weapon,
                handle_unequip_weapon,
                handle_unequip_gear,
            )
                .run_if(in_state(GameState::Playing)),
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Equipping
// ═══════════════════════════════════════════════════════════════════════

/// Places an incoming unit on a weapon hand or a gear slot.
fn handle_equip_item(
    mut equip_events: EventReader<EquipItemEvent>,
    mut equipment: ResMut<Equipment>,
    mut inventory: ResMut<Inventory>,
    item_registry: Res<ItemRegistry>,
    mut switched_events: EventWriter<WeaponSwitchedEvent>,
    mut changed_events: EventWriter<InventoryChangedEvent>,
) {
    for event in equip_events.read() {
        let Some(def) = item_registry.get(&event.item_id) else {
            warn!("Equipment: cannot equip unknown item '{}'", event.item_id);
            continue;
        };

        if def.is_equippable_weapon() {
            let (hand, displaced) = equipment.equip_weapon(def);
            if let Some(old) = displaced {
                warn!(
                    "Equipment: {:?} hand overwritten, discarding {} ({:.0} durability left)",
                    hand, old.item_id, old.durability
                );
            }
            switched_events.send(WeaponSwitchedEvent {
                item_id: equipment.active_item_id(),
            });
            continue;
        }

        let Some((slot, displaced)) = equipment.equip_gear(def) else {
            warn!("Equipment: '{}' fits no gear slot", def.id);
            continue;
        };
        if slot == GearSlot::Backpack {
            let released = displaced.as_ref().map(|p| p.slot_bonus).unwrap_or(0);
            let delta = def.slot_bonus as i32 - released as i32;
            if delta != 0 {
                inventory.adjust_capacity(delta);
                changed_events.send(InventoryChangedEvent);
            }
        }
        if let Some(old) = displaced {
            warn!(
                "Equipment: {:?} slot overwritten, discarding {}",
                slot, old.item_id
            );
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Switching and unequipping
// ═══════════════════════════════════════════════════════════════════════

/// Makes a hand the active one. Switching onto an empty hand is refused,
/// but listeners still get told which weapon is current.
fn handle_switch_weapon(
    mut switch_events: EventReader<SwitchWeaponEvent>,
    mut equipment: ResMut<Equipment>,
    mut switched_events: EventWriter<WeaponSwitchedEvent>,
) {
    for event in switch_events.read() {
        equipment.switch_weapon(event.hand);
        switched_events.send(WeaponSwitchedEvent {
            item_id: equipment.active_item_id(),
        });
    }
}

/// Takes a weapon off a hand and puts one unit back in the bag. An empty
/// hand is a silent no-op.
fn handle_unequip_weapon(
    mut unequip_events: EventReader<UnequipWeaponEvent>,
    mut equipment: ResMut<Equipment>,
    mut inventory: ResMut<Inventory>,
    item_registry: Res<ItemRegistry>,
    mut switched_events: EventWriter<WeaponSwitchedEvent>,
    mut changed_events: EventWriter<InventoryChangedEvent>,
) {
    for event in unequip_events.read() {
        let Some(weapon) = equipment.unequip_weapon(event.hand) else {
            continue;
        };
        return_unit_to_bag(&weapon.item_id, &mut inventory, &item_registry);
        changed_events.send(InventoryChangedEvent);
        switched_events.send(WeaponSwitchedEvent {
            item_id: equipment.active_item_id(),
        });
    }
}

/// Takes a gear piece off and puts one unit back in the bag. Backpacks
/// also give their bonus slots back, which can only reclaim empty ones.
fn handle_unequip_gear(
    mut unequip_events: EventReader<UnequipGearEvent>,
    mut equipment: ResMut<Equipment>,
    mut inventory: ResMut<Inventory>,
    item_registry: Res<ItemRegistry>,
    mut changed_events: EventWriter<InventoryChangedEvent>,
) {
    for event in unequip_events.read() {
        let Some(piece) = equipment.unequip_gear(event.slot) else {
            continue;
        };
        return_unit_to_bag(&piece.item_id, &mut inventory, &item_registry);
        changed_events.send(InventoryChangedEvent);

        if event.slot == GearSlot::Backpack && piece.slot_bonus > 0 {
            inventory.adjust_capacity(-(piece.slot_bonus as i32));
            changed_events.send(InventoryChangedEvent);
        }
    }
}

/// Best-effort return of a single unit. A full bag loses the unit.
fn return_unit_to_bag(item_id: &str, inventory: &mut Inventory, item_registry: &ItemRegistry) {
    let Some(def) = item_registry.get(item_id) else {
        warn!("Equipment: unequipped unknown item '{}', discarding it", item_id);
        return;
    };
    if !inventory.add(def, 1) {
        warn!("Equipment: bag full, {} lost on unequip", item_id);
    }
}
