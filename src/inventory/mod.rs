//! Inventory domain: slot mutations and the use-item dispatcher.
//!
//! All additions and removals funnel through here so that exactly one
//! `InventoryChangedEvent` fires per accepted operation. Consumables and
//! equippables are not resolved locally: using one hands the unit off to
//! the player vitals (`ConsumeItemEvent`) or the equipment board
//! (`EquipItemEvent`).

use bevy::prelude::*;

use crate::shared::*;

pub struct InventoryPlugin;

impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (handle_item_pickups, handle_item_removals, handle_use_item)
                .run_if(in_state(GameState::Playing)),
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Additions and removals
// ═══════════════════════════════════════════════════════════════════════

/// Folds picked-up items into the bag. Best effort: whatever does not fit
/// is dropped on the floor of the void, with a warning.
fn handle_item_pickups(
    mut pickup_events: EventReader<ItemPickupEvent>,
    mut inventory: ResMut<Inventory>,
    item_registry: Res<ItemRegistry>,
    mut changed_events: EventWriter<InventoryChangedEvent>,
) {
    for event in pickup_events.read() {
        if event.quantity == 0 {
            continue;
        }
        let Some(def) = item_registry.get(&event.item_id) else {
            warn!("Inventory: pickup of unknown item '{}' ignored", event.item_id);
            continue;
        };

        let fully_stored = inventory.add(def, event.quantity);
        if !fully_stored {
            warn!(
                "Inventory: bag full, lost part of {} x{}",
                event.item_id, event.quantity
            );
        }
        changed_events.send(InventoryChangedEvent);
    }
}

/// Removes items on request. All or nothing: short stock leaves the bag
/// untouched and fires no notification.
fn handle_item_removals(
    mut removal_events: EventReader<ItemRemovedEvent>,
    mut inventory: ResMut<Inventory>,
    mut changed_events: EventWriter<InventoryChangedEvent>,
) {
    for event in removal_events.read() {
        if inventory.remove(&event.item_id, event.quantity) {
            changed_events.send(InventoryChangedEvent);
        } else {
            info!(
                "Inventory: cannot remove {} x{}, not enough in bag",
                event.item_id, event.quantity
            );
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Use-item dispatch
// ═══════════════════════════════════════════════════════════════════════

/// Routes a "use slot N" request by item category.
///
/// Potions and food are consumed here and handed to the vitals systems;
/// tools, weapons and gear leave the bag and go to the equipment board.
/// Raw resources and stations do nothing. A dead player uses nothing.
fn handle_use_item(
    mut use_events: EventReader<UseItemEvent>,
    mut inventory: ResMut<Inventory>,
    item_registry: Res<ItemRegistry>,
    vitals: Res<Vitals>,
    mut changed_events: EventWriter<InventoryChangedEvent>,
    mut consume_events: EventWriter<ConsumeItemEvent>,
    mut equip_events: EventWriter<EquipItemEvent>,
) {
    for event in use_events.read() {
        if vitals.dead {
            continue;
        }
        let Some(stack) = inventory.slots.get(event.slot).and_then(|s| s.clone()) else {
            continue;
        };
        let Some(def) = item_registry.get(&stack.item_id) else {
            warn!("Inventory: slot {} holds unknown item '{}'", event.slot, stack.item_id);
            continue;
        };

        match def.category {
            // ── Consumables ──
            ItemCategory::Potion | ItemCategory::Food => {
                if inventory.remove(&stack.item_id, 1) {
                    consume_events.send(ConsumeItemEvent {
                        item_id: stack.item_id.clone(),
                    });
                    changed_events.send(InventoryChangedEvent);
                }
            }

            // ── Equippables ──
            ItemCategory::Tool | ItemCategory::Weapon => {
                if inventory.remove(&stack.item_id, 1) {
                    equip_events.send(EquipItemEvent {
                        item_id: stack.item_id.clone(),
                    });
                    changed_events.send(InventoryChangedEvent);
                }
            }
            ItemCategory::Armor | ItemCategory::Utility => {
                if def.gear_slot.is_none() {
                    warn!("Inventory: '{}' has no gear slot, cannot wear it", def.id);
                    continue;
                }
                if inventory.remove(&stack.item_id, 1) {
                    equip_events.send(EquipItemEvent {
                        item_id: stack.item_id.clone(),
                    });
                    changed_events.send(InventoryChangedEvent);
                }
            }

            // ── Inert in hand ──
            ItemCategory::Resource | ItemCategory::CraftingStation => {}
        }
    }
}
