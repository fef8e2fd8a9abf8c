use crate::shared::*;

/// Populate the ItemRegistry with all item definitions.
///
/// Stats of note:
///   - Tools double as weak weapons; their harvest table decides which
///     tiles they can break. The axe fells wood-kind tiles in one
///     strike regardless of its computed damage.
///   - Gear is authored with its body slot. Only backpacks carry a
///     slot bonus.
///   - Recovery values at zero fall back to the default recovery
///     constants when consumed.
pub fn populate_items(registry: &mut ItemRegistry) {
    let items: Vec<ItemDef> = vec![
        // ── Raw resources ──────────────────────────────────────────────

        ItemDef {
            id: "wood".into(),
            name: "Wood Log".into(),
            description: "Split from pines. Burns well.".into(),
            category: ItemCategory::Resource,
            max_stack: DEFAULT_MAX_STACK,
            recovery: None,
            weapon: None,
            harvest: None,
            gear_slot: None,
            slot_bonus: 0,
            instant_harvest: None,
        },
        ItemDef {
            id: "stone".into(),
            name: "Stone".into(),
            description: "A fist-sized chunk of rock.".into(),
            category: ItemCategory::Resource,
            max_stack: DEFAULT_MAX_STACK,
            recovery: None,
            weapon: None,
            harvest: None,
            gear_slot: None,
            slot_bonus: 0,
            instant_harvest: None,
        },
        ItemDef {
            id: "iron_ore".into(),
            name: "Iron Ore".into(),
            description: "Rust-red ore, heavy for its size.".into(),
            category: ItemCategory::Resource,
            max_stack: DEFAULT_MAX_STACK,
            recovery: None,
            weapon: None,
            harvest: None,
            gear_slot: None,
            slot_bonus: 0,
            instant_harvest: None,
        },
        ItemDef {
            id: "grass_fiber".into(),
            name: "Grass Fiber".into(),
            description: "Tough blades, good for cordage.".into(),
            category: ItemCategory::Resource,
            max_stack: DEFAULT_MAX_STACK,
            recovery: None,
            weapon: None,
            harvest: None,
            gear_slot: None,
            slot_bonus: 0,
            instant_harvest: None,
        },
        ItemDef {
            id: "ice_shard".into(),
            name: "Ice Shard".into(),
            description: "Never seems to melt.".into(),
            category: ItemCategory::Resource,
            max_stack: DEFAULT_MAX_STACK,
            recovery: None,
            weapon: None,
            harvest: None,
            gear_slot: None,
            slot_bonus: 0,
            instant_harvest: None,
        },

        // ── Tools ──────────────────────────────────────────────────────

        ItemDef {
            id: "axe".into(),
            name: "Axe".into(),
            description: "Fells a tree in a single swing.".into(),
            category: ItemCategory::Tool,
            max_stack: 1,
            recovery: None,
            weapon: Some(WeaponStats {
                max_durability: 40.0,
                attack_power: 12.0,
                durability_per_use: 1.0,
                attack_range: 2.0,
            }),
            harvest: Some(HarvestStats {
                wood: 1.5,
                stone: 0.3,
                ore: 0.0,
            }),
            gear_slot: None,
            slot_bonus: 0,
            instant_harvest: Some(ResourceKind::Wood),
        },
        ItemDef {
            id: "pickaxe".into(),
            name: "Pickaxe".into(),
            description: "Bites into rock and ore veins.".into(),
            category: ItemCategory::Tool,
            max_stack: 1,
            recovery: None,
            weapon: Some(WeaponStats {
                max_durability: 40.0,
                attack_power: 10.0,
                durability_per_use: 1.0,
                attack_range: 2.0,
            }),
            harvest: Some(HarvestStats {
                wood: 0.0,
                stone: 1.5,
                ore: 1.2,
            }),
            gear_slot: None,
            slot_bonus: 0,
            instant_harvest: None,
        },

        // ── Weapons ────────────────────────────────────────────────────

        ItemDef {
            id: "bone_sword".into(),
            name: "Bone Sword".into(),
            description: "Sharpened rib, surprisingly keen.".into(),
            category: ItemCategory::Weapon,
            max_stack: 1,
            recovery: None,
            weapon: Some(WeaponStats {
                max_durability: 60.0,
                attack_power: 15.0,
                durability_per_use: 2.0,
                attack_range: 2.5,
            }),
            harvest: None,
            gear_slot: None,
            slot_bonus: 0,
            instant_harvest: None,
        },
        ItemDef {
            id: "wooden_club".into(),
            name: "Wooden Club".into(),
            description: "Simple, heavy, reliable.".into(),
            category: ItemCategory::Weapon,
            max_stack: 1,
            recovery: None,
            weapon: Some(WeaponStats {
                max_durability: 30.0,
                attack_power: 12.0,
                durability_per_use: 1.0,
                attack_range: 2.0,
            }),
            harvest: None,
            gear_slot: None,
            slot_bonus: 0,
            instant_harvest: None,
        },

        // ── Gear ───────────────────────────────────────────────────────

        ItemDef {
            id: "linen_shirt".into(),
            name: "Linen Shirt".into(),
            description: "Worn against the skin.".into(),
            category: ItemCategory::Armor,
            max_stack: 1,
            recovery: None,
            weapon: None,
            harvest: None,
            gear_slot: Some(GearSlot::InnerShirt),
            slot_bonus: 0,
            instant_harvest: None,
        },
        ItemDef {
            id: "fur_coat".into(),
            name: "Fur Coat".into(),
            description: "Keeps the cold out. Mostly.".into(),
            category: ItemCategory::Armor,
            max_stack: 1,
            recovery: None,
            weapon: None,
            harvest: None,
            gear_slot: Some(GearSlot::OuterShirt),
            slot_bonus: 0,
            instant_harvest: None,
        },
        ItemDef {
            id: "hide_pants".into(),
            name: "Hide Pants".into(),
            description: "Stiff at first, then just right.".into(),
            category: ItemCategory::Armor,
            max_stack: 1,
            recovery: None,
            weapon: None,
            harvest: None,
            gear_slot: Some(GearSlot::Pants),
            slot_bonus: 0,
            instant_harvest: None,
        },
        ItemDef {
            id: "fur_boots".into(),
            name: "Fur Boots".into(),
            description: "Snow stays on the outside.".into(),
            category: ItemCategory::Armor,
            max_stack: 1,
            recovery: None,
            weapon: None,
            harvest: None,
            gear_slot: Some(GearSlot::Shoes),
            slot_bonus: 0,
            instant_harvest: None,
        },
        ItemDef {
            id: "wool_hat".into(),
            name: "Wool Hat".into(),
            description: "Itchy but warm.".into(),
            category: ItemCategory::Armor,
            max_stack: 1,
            recovery: None,
            weapon: None,
            harvest: None,
            gear_slot: Some(GearSlot::Hat),
            slot_bonus: 0,
            instant_harvest: None,
        },
        ItemDef {
            id: "leather_backpack".into(),
            name: "Leather Backpack".into(),
            description: "Ten more slots on your shoulders.".into(),
            category: ItemCategory::Utility,
            max_stack: 1,
            recovery: None,
            weapon: None,
            harvest: None,
            gear_slot: Some(GearSlot::Backpack),
            slot_bonus: 10,
            instant_harvest: None,
        },

        // ── Consumables ────────────────────────────────────────────────

        ItemDef {
            id: "herbal_potion".into(),
            name: "Herbal Potion".into(),
            description: "Bitter, green, effective.".into(),
            category: ItemCategory::Potion,
            max_stack: 20,
            recovery: Some(RecoveryStats {
                health: 40.0,
                hunger: 0.0,
                thirst: 10.0,
            }),
            weapon: None,
            harvest: None,
            gear_slot: None,
            slot_bonus: 0,
            instant_harvest: None,
        },
        ItemDef {
            id: "water_flask".into(),
            name: "Water Flask".into(),
            description: "Melted snow, boiled twice.".into(),
            category: ItemCategory::Potion,
            max_stack: 20,
            recovery: Some(RecoveryStats {
                health: 0.0,
                hunger: 0.0,
                thirst: 35.0,
            }),
            weapon: None,
            harvest: None,
            gear_slot: None,
            slot_bonus: 0,
            instant_harvest: None,
        },
        ItemDef {
            id: "berry".into(),
            name: "Berry".into(),
            description: "Sweet-sour and seedy.".into(),
            category: ItemCategory::Food,
            max_stack: DEFAULT_MAX_STACK,
            recovery: Some(RecoveryStats {
                health: 0.0,
                hunger: 15.0,
                thirst: 0.0,
            }),
            weapon: None,
            harvest: None,
            gear_slot: None,
            slot_bonus: 0,
            instant_harvest: None,
        },
        ItemDef {
            id: "dried_meat".into(),
            name: "Dried Meat".into(),
            description: "Chewy strips cured over the fire.".into(),
            category: ItemCategory::Food,
            max_stack: DEFAULT_MAX_STACK,
            recovery: Some(RecoveryStats {
                health: 0.0,
                hunger: 40.0,
                thirst: 0.0,
            }),
            weapon: None,
            harvest: None,
            gear_slot: None,
            slot_bonus: 0,
            instant_harvest: None,
        },

        // ── Stations ───────────────────────────────────────────────────

        ItemDef {
            id: "campfire".into(),
            name: "Campfire".into(),
            description: "Placed and lit by hand.".into(),
            category: ItemCategory::CraftingStation,
            max_stack: 1,
            recovery: None,
            weapon: None,
            harvest: None,
            gear_slot: None,
            slot_bonus: 0,
            instant_harvest: None,
        },
    ];

    for item in items {
        registry.items.insert(item.id.clone(), item);
    }
}
