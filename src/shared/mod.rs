//! Shared components, resources, events, and states for Frostreach.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE — top-level state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Loading,
    Playing,
    Paused,
}

// ═══════════════════════════════════════════════════════════════════════
// MAPS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MapId {
    /// Starting area with the respawn pillars.
    #[default]
    Basecamp,
    /// Snowfield. Cold exposure and blizzards apply here.
    Tundra,
}

/// Grid cell address on a tile layer. `z` is the layer index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CellPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Cell containing a world position, on the ground layer.
    pub fn from_world(v: Vec2) -> Self {
        Self {
            x: v.x.floor() as i32,
            y: v.y.floor() as i32,
            z: 0,
        }
    }

    /// Preference-store key for this cell's destruction flag.
    pub fn pref_key(&self) -> String {
        format!("Tile_{}_{}_{}", self.x, self.y, self.z)
    }

    /// Center of the cell in world space (layer ignored).
    pub fn world_center(&self) -> Vec2 {
        Vec2::new(self.x as f32 + 0.5, self.y as f32 + 0.5)
    }
}

/// The currently loaded map.
#[derive(Resource, Debug, Clone, Default)]
pub struct CurrentMap {
    pub id: MapId,
}

/// Respawn pillar positions for the loaded map.
#[derive(Resource, Debug, Clone, Default)]
pub struct RespawnAnchors {
    pub points: Vec<Vec2>,
}

impl RespawnAnchors {
    /// Nearest pillar to `from`, or the origin when the map has none.
    pub fn nearest(&self, from: Vec2) -> Vec2 {
        self.points
            .iter()
            .copied()
            .min_by(|a, b| {
                a.distance_squared(from)
                    .total_cmp(&b.distance_squared(from))
            })
            .unwrap_or(Vec2::ZERO)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ITEMS
// ═══════════════════════════════════════════════════════════════════════

/// Unique identifier for every item type in the game.
/// Using string IDs for data-driven flexibility.
pub type ItemId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    Resource,
    Tool,
    Weapon,
    Armor,
    Utility,
    CraftingStation,
    Potion,
    Food,
}

/// What a destructible tile yields and which tool stat harvests it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Wood,
    Stone,
    Ore,
    /// Grass, berry bushes. Harvested bare-handed in one strike.
    Plant,
    Special,
}

/// Body slot for armor and utility gear. Each equippable item is
/// authored with its slot; nothing is inferred from display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GearSlot {
    InnerShirt,
    OuterShirt,
    Pants,
    Shoes,
    Hat,
    Backpack,
}

impl GearSlot {
    pub const COUNT: usize = 6;

    pub fn index(self) -> usize {
        match self {
            GearSlot::InnerShirt => 0,
            GearSlot::OuterShirt => 1,
            GearSlot::Pants => 2,
            GearSlot::Shoes => 3,
            GearSlot::Hat => 4,
            GearSlot::Backpack => 5,
        }
    }
}

/// Vitals restored when a potion or food item is consumed.
/// Zero fields fall back to the DEFAULT_* recovery constants.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecoveryStats {
    pub health: f32,
    pub hunger: f32,
    pub thirst: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct WeaponStats {
    pub max_durability: f32,
    pub attack_power: f32,
    pub durability_per_use: f32,
    pub attack_range: f32,
}

/// Per-resource harvest efficiency. Zero means the tool cannot
/// harvest that resource at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct HarvestStats {
    pub wood: f32,
    pub stone: f32,
    pub ore: f32,
}

impl HarvestStats {
    pub fn efficiency(&self, kind: ResourceKind) -> f32 {
        match kind {
            ResourceKind::Wood => self.wood,
            ResourceKind::Stone => self.stone,
            ResourceKind::Ore => self.ore,
            ResourceKind::Plant | ResourceKind::Special => 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ItemDef {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub category: ItemCategory,
    pub max_stack: u32,
    pub recovery: Option<RecoveryStats>,
    pub weapon: Option<WeaponStats>,
    pub harvest: Option<HarvestStats>,
    /// Body slot for Armor/Utility items.
    pub gear_slot: Option<GearSlot>,
    /// Inventory capacity granted while equipped (backpacks).
    pub slot_bonus: u32,
    /// Resource kind this tool fells in a single strike (axes on wood).
    pub instant_harvest: Option<ResourceKind>,
}

impl ItemDef {
    pub fn is_equippable_weapon(&self) -> bool {
        matches!(self.category, ItemCategory::Tool | ItemCategory::Weapon)
    }

    pub fn attack_power(&self) -> f32 {
        self.weapon.map(|w| w.attack_power).unwrap_or(0.0)
    }

    /// Reach of this item, or the bare-handed default.
    pub fn attack_range(&self) -> f32 {
        self.weapon
            .map(|w| w.attack_range)
            .unwrap_or(DEFAULT_ATTACK_RANGE)
    }

    pub fn max_durability(&self) -> f32 {
        self.weapon.map(|w| w.max_durability).unwrap_or(0.0)
    }

    pub fn durability_per_use(&self) -> f32 {
        self.weapon.map(|w| w.durability_per_use).unwrap_or(0.0)
    }

    pub fn harvest_efficiency(&self, kind: ResourceKind) -> f32 {
        self.harvest.map(|h| h.efficiency(kind)).unwrap_or(0.0)
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct ItemRegistry {
    pub items: HashMap<ItemId, ItemDef>,
}

impl ItemRegistry {
    pub fn get(&self, id: &str) -> Option<&ItemDef> {
        self.items.get(id)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// INVENTORY — ordered slots, first-fit stacking, elastic capacity
// ═══════════════════════════════════════════════════════════════════════

/// A slot entry. Quantity is always 1..=max_stack; an empty slot is
/// `None`, never a zero stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    pub item_id: ItemId,
    pub quantity: u32,
}

#[derive(Resource, Debug, Clone)]
pub struct Inventory {
    pub slots: Vec<Option<Stack>>,
    base_capacity: u32,
    bonus_capacity: u32,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::with_base(BASE_INVENTORY_SLOTS)
    }
}

impl Inventory {
    pub fn with_base(base: u32) -> Self {
        Self {
            slots: vec![None; base as usize],
            base_capacity: base,
            bonus_capacity: 0,
        }
    }

    /// Current slot count. May exceed base + bonus after a shrink was
    /// blocked by occupied tail slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn base_capacity(&self) -> u32 {
        self.base_capacity
    }

    pub fn bonus_capacity(&self) -> u32 {
        self.bonus_capacity
    }

    pub fn empty_slots(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }

    /// Add `amount` units, stacking first-fit: one pass topping up
    /// existing stacks of the same item, then one pass claiming empty
    /// slots. Placement is best-effort; returns true only when the
    /// entire amount found room. Zero amounts are rejected untouched.
    pub fn add(&mut self, item: &ItemDef, amount: u32) -> bool {
        if amount == 0 {
            return false;
        }
        let mut remaining = amount;

        // First pass: stack onto existing slots with the same item
        for slot in self.slots.iter_mut() {
            if remaining == 0 {
                break;
            }
            if let Some(ref mut s) = slot {
                if s.item_id == item.id && s.quantity < item.max_stack {
                    let space = item.max_stack - s.quantity;
                    let put = remaining.min(space);
                    s.quantity += put;
                    remaining -= put;
                }
            }
        }

        // Second pass: fill empty slots
        for slot in self.slots.iter_mut() {
            if remaining == 0 {
                break;
            }
            if slot.is_none() {
                let put = remaining.min(item.max_stack);
                *slot = Some(Stack {
                    item_id: item.id.clone(),
                    quantity: put,
                });
                remaining -= put;
            }
        }

        remaining == 0
    }

    /// Remove `amount` units, all or nothing: when fewer than `amount`
    /// are held in total, nothing is touched and false is returned.
    /// Otherwise slots drain front-to-back, clearing any stack that
    /// hits zero.
    pub fn remove(&mut self, item_id: &str, amount: u32) -> bool {
        if amount == 0 || self.count(item_id) < amount {
            return false;
        }
        let mut remaining = amount;
        for slot in self.slots.iter_mut() {
            if remaining == 0 {
                break;
            }
            if let Some(ref mut s) = slot {
                if s.item_id == item_id {
                    let take = remaining.min(s.quantity);
                    s.quantity -= take;
                    remaining -= take;
                    if s.quantity == 0 {
                        *slot = None;
                    }
                }
            }
        }
        true
    }

    pub fn count(&self, item_id: &str) -> u32 {
        self.slots
            .iter()
            .filter_map(|s| s.as_ref())
            .filter(|s| s.item_id == item_id)
            .map(|s| s.quantity)
            .sum()
    }

    pub fn has(&self, item_id: &str, amount: u32) -> bool {
        self.count(item_id) >= amount
    }

    /// Grow or shrink bonus capacity. Bonus is floored at zero. Growth
    /// appends empty slots at the tail; shrinking walks from the tail
    /// backward removing only empty slots, so a shrink over occupied
    /// slots applies partially and the overhang is reclaimed by a later
    /// adjustment.
    pub fn adjust_capacity(&mut self, delta: i32) {
        self.bonus_capacity = (self.bonus_capacity as i32 + delta).max(0) as u32;
        let target = (self.base_capacity + self.bonus_capacity) as usize;

        while self.slots.len() < target {
            self.slots.push(None);
        }

        let mut excess = self.slots.len().saturating_sub(target);
        let mut i = self.slots.len();
        while i > 0 && excess > 0 {
            i -= 1;
            if self.slots[i].is_none() {
                self.slots.remove(i);
                excess -= 1;
            }
        }
    }

    /// Empty every slot in place. Capacity is unchanged.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// EQUIPMENT — two weapon hands with durability, six gear slots
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeaponHand {
    Primary,
    Secondary,
}

impl WeaponHand {
    pub fn index(self) -> usize {
        match self {
            WeaponHand::Primary => 0,
            WeaponHand::Secondary => 1,
        }
    }

    pub fn other(self) -> Self {
        match self {
            WeaponHand::Primary => WeaponHand::Secondary,
            WeaponHand::Secondary => WeaponHand::Primary,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EquippedWeapon {
    pub item_id: ItemId,
    pub durability: f32,
}

/// A piece of equipped gear. `slot_bonus` is captured at equip time so
/// unequipping a backpack shrinks capacity by exactly what it granted.
#[derive(Debug, Clone, PartialEq)]
pub struct GearPiece {
    pub item_id: ItemId,
    pub slot_bonus: u32,
}

#[derive(Resource, Debug, Clone)]
pub struct Equipment {
    pub weapons: [Option<EquippedWeapon>; 2],
    /// Invariant: when set, always names an occupied hand.
    pub active: Option<WeaponHand>,
    pub gear: [Option<GearPiece>; GearSlot::COUNT],
}

impl Default for Equipment {
    fn default() -> Self {
        Self {
            weapons: [None, None],
            active: None,
            gear: [None, None, None, None, None, None],
        }
    }
}

impl Equipment {
    pub fn weapon(&self, hand: WeaponHand) -> Option<&EquippedWeapon> {
        self.weapons[hand.index()].as_ref()
    }

    pub fn active_weapon(&self) -> Option<&EquippedWeapon> {
        self.active.and_then(|h| self.weapons[h.index()].as_ref())
    }

    pub fn active_item_id(&self) -> Option<ItemId> {
        self.active_weapon().map(|w| w.item_id.clone())
    }

    pub fn gear_piece(&self, slot: GearSlot) -> Option<&GearPiece> {
        self.gear[slot.index()].as_ref()
    }

    /// Equip into the first free hand; with both hands full the primary
    /// is overwritten and its occupant returned for the caller to
    /// dispose of. The new weapon starts at full durability and always
    /// leaves a hand active.
    pub fn equip_weapon(&mut self, item: &ItemDef) -> (WeaponHand, Option<EquippedWeapon>) {
        let fresh = EquippedWeapon {
            item_id: item.id.clone(),
            durability: item.max_durability(),
        };
        if self.weapons[0].is_none() {
            self.weapons[0] = Some(fresh);
            self.active = Some(WeaponHand::Primary);
            (WeaponHand::Primary, None)
        } else if self.weapons[1].is_none() {
            self.weapons[1] = Some(fresh);
            if self.active.is_none() {
                self.active = Some(WeaponHand::Secondary);
            }
            (WeaponHand::Secondary, None)
        } else {
            let displaced = self.weapons[0].replace(fresh);
            self.active = Some(WeaponHand::Primary);
            (WeaponHand::Primary, displaced)
        }
    }

    /// Activate a hand. Only applies when that hand is occupied.
    pub fn switch_weapon(&mut self, hand: WeaponHand) {
        if self.weapons[hand.index()].is_some() {
            self.active = Some(hand);
        }
    }

    /// Wear down the weapon in `hand`. Returns the weapon when its
    /// durability is exhausted, after clearing the hand and failing the
    /// active hand over.
    pub fn apply_wear(&mut self, hand: WeaponHand, per_use: f32) -> Option<EquippedWeapon> {
        match self.weapons[hand.index()].as_mut() {
            Some(w) => {
                w.durability -= per_use;
                if w.durability > 0.0 {
                    return None;
                }
            }
            None => return None,
        }
        let broken = self.weapons[hand.index()].take();
        self.fail_over(hand);
        broken
    }

    /// Clear a hand, returning its occupant. The active hand fails over
    /// to the other occupied hand (or to empty) so it never dangles.
    pub fn unequip_weapon(&mut self, hand: WeaponHand) -> Option<EquippedWeapon> {
        let removed = self.weapons[hand.index()].take()?;
        self.fail_over(hand);
        Some(removed)
    }

    fn fail_over(&mut self, cleared: WeaponHand) {
        if self.active == Some(cleared) {
            let other = cleared.other();
            self.active = self.weapons[other.index()].is_some().then_some(other);
        }
    }

    /// Place gear into its authored slot. Returns the slot used and any
    /// displaced occupant; None when the item has no gear slot.
    pub fn equip_gear(&mut self, item: &ItemDef) -> Option<(GearSlot, Option<GearPiece>)> {
        let slot = item.gear_slot?;
        let piece = GearPiece {
            item_id: item.id.clone(),
            slot_bonus: item.slot_bonus,
        };
        let displaced = self.gear[slot.index()].replace(piece);
        Some((slot, displaced))
    }

    pub fn unequip_gear(&mut self, slot: GearSlot) -> Option<GearPiece> {
        self.gear[slot.index()].take()
    }

    /// Drop everything (death wipe). Cleared items are not recovered.
    pub fn clear(&mut self) {
        self.weapons = [None, None];
        self.active = None;
        self.gear = [None, None, None, None, None, None];
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PLAYER
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Up,
    Right,
    #[default]
    Down,
    Left,
}

impl Facing {
    /// Animator encoding: 0=up, 1=right, 2=down, 3=left.
    pub fn index(self) -> u8 {
        match self {
            Facing::Up => 0,
            Facing::Right => 1,
            Facing::Down => 2,
            Facing::Left => 3,
        }
    }

    /// Dominant-axis quantization of a movement vector.
    pub fn from_vec(dir: Vec2) -> Self {
        if dir.x.abs() > dir.y.abs() {
            if dir.x > 0.0 {
                Facing::Right
            } else {
                Facing::Left
            }
        } else if dir.y > 0.0 {
            Facing::Up
        } else {
            Facing::Down
        }
    }
}

#[derive(Component, Debug, Clone, Default)]
pub struct Player;

/// Movement speed handed to the movement collaborator. Climate and
/// status effects write `modifier`; they never touch `base`.
#[derive(Resource, Debug, Clone)]
pub struct PlayerSpeed {
    pub base: f32,
    pub modifier: f32,
}

impl Default for PlayerSpeed {
    fn default() -> Self {
        Self {
            base: PLAYER_BASE_SPEED,
            modifier: 1.0,
        }
    }
}

impl PlayerSpeed {
    pub fn current(&self) -> f32 {
        self.base * self.modifier
    }
}

#[derive(Resource, Debug, Clone)]
pub struct Vitals {
    pub health: f32,
    pub fatigue: f32,
    pub hunger: f32,
    pub thirst: f32,
    pub dead: bool,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            health: MAX_VITAL,
            fatigue: MAX_VITAL,
            hunger: MAX_VITAL,
            thirst: MAX_VITAL,
            dead: false,
        }
    }
}

impl Vitals {
    /// Death comes from an empty health, hunger, or thirst bar.
    /// Empty fatigue only slows the player down.
    pub fn depleted(&self) -> bool {
        self.health <= 0.0 || self.hunger <= 0.0 || self.thirst <= 0.0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Passive decay tuning. Climate writes the scale factors and the cold
/// drain through this resource instead of poking the decay constants.
#[derive(Resource, Debug, Clone)]
pub struct VitalRates {
    pub fatigue_per_sec: f32,
    pub hunger_per_sec: f32,
    pub thirst_per_sec: f32,
    pub hunger_scale: f32,
    pub thirst_scale: f32,
    pub cold_drain_per_sec: f32,
}

impl Default for VitalRates {
    fn default() -> Self {
        Self {
            fatigue_per_sec: FATIGUE_DECAY_PER_SEC,
            hunger_per_sec: HUNGER_DECAY_PER_SEC,
            thirst_per_sec: THIRST_DECAY_PER_SEC,
            hunger_scale: 1.0,
            thirst_scale: 1.0,
            cold_drain_per_sec: 0.0,
        }
    }
}

impl VitalRates {
    pub fn set_exposure(&mut self, decay_scale: f32, cold_drain: f32) {
        self.hunger_scale = decay_scale;
        self.thirst_scale = decay_scale;
        self.cold_drain_per_sec = cold_drain;
    }

    pub fn clear_exposure(&mut self) {
        self.set_exposure(1.0, 0.0);
    }
}

/// Whether the player is resting. Resting suspends passive decay and
/// recovers fatigue.
#[derive(Resource, Debug, Clone, Default)]
pub struct RestState {
    pub resting: bool,
}

// ═══════════════════════════════════════════════════════════════════════
// WORLD — destructible resource tiles
// ═══════════════════════════════════════════════════════════════════════

pub type TileId = String;

#[derive(Debug, Clone)]
pub struct TileDef {
    pub id: TileId,
    pub name: String,
    pub resource: ResourceKind,
    pub max_health: f32,
    pub drop_item: Option<ItemId>,
    /// Inclusive drop quantity range rolled on destruction.
    pub min_drop: u32,
    pub max_drop: u32,
    /// Plants come down in one bare-handed strike.
    pub harvest_without_tool: bool,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct TileRegistry {
    pub tiles: HashMap<TileId, TileDef>,
}

impl TileRegistry {
    pub fn get(&self, id: &str) -> Option<&TileDef> {
        self.tiles.get(id)
    }
}

/// A destructible tile instance with its remaining health.
#[derive(Debug, Clone)]
pub struct LiveTile {
    pub tile_id: TileId,
    pub health: f32,
}

/// All destructible tiles on the loaded map. Cells destroyed in a past
/// session are never registered (their preference flag is 0).
#[derive(Resource, Debug, Clone, Default)]
pub struct ResourceGrid {
    pub cells: HashMap<CellPos, LiveTile>,
}

impl ResourceGrid {
    pub fn tile_at(&self, cell: &CellPos) -> Option<&LiveTile> {
        self.cells.get(cell)
    }
}

/// Whether tile/enemy drops spawn pickup entities or go straight into
/// the inventory.
#[derive(Resource, Debug, Clone)]
pub struct DropSettings {
    pub spawn_pickups: bool,
}

impl Default for DropSettings {
    fn default() -> Self {
        Self {
            spawn_pickups: true,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ENEMIES
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyArchetype {
    /// Walks a two-point route, chases along its patrol axis.
    Patroller,
    /// Patroller that fires projectiles before melee range.
    Shooter,
}

#[derive(Component, Debug, Clone)]
pub struct Enemy {
    pub archetype: EnemyArchetype,
    pub health: f32,
    pub max_health: f32,
    pub move_speed: f32,
    pub chase_speed: f32,
    pub attack_range: f32,
    pub detection_range: f32,
    pub attack_damage: f32,
    /// Spawn point; patrol routes are anchored here.
    pub home: Vec2,
    pub facing: Facing,
}

impl Enemy {
    pub fn new(archetype: EnemyArchetype, home: Vec2) -> Self {
        Self {
            archetype,
            health: 100.0,
            max_health: 100.0,
            move_speed: 3.0,
            chase_speed: 4.0,
            attack_range: 1.0,
            detection_range: 5.0,
            attack_damage: 10.0,
            home,
            facing: Facing::Down,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SETTINGS — flat preference store plus the typed view over it
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Int(i64),
    Float(f64),
    Str(String),
}

/// Flat key/value store for preferences. Read once at startup, written
/// only on explicit save. Per-cell tile destruction flags share this
/// store with the settings keys.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrefStore {
    pub values: HashMap<String, PrefValue>,
}

impl PrefStore {
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        match self.values.get(key) {
            Some(PrefValue::Int(v)) => *v,
            _ => default,
        }
    }

    pub fn get_float(&self, key: &str, default: f64) -> f64 {
        match self.values.get(key) {
            Some(PrefValue::Float(v)) => *v,
            Some(PrefValue::Int(v)) => *v as f64,
            _ => default,
        }
    }

    pub fn get_str(&self, key: &str, default: &str) -> String {
        match self.values.get(key) {
            Some(PrefValue::Str(v)) => v.clone(),
            _ => default.to_string(),
        }
    }

    pub fn set_int(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), PrefValue::Int(value));
    }

    pub fn set_float(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_string(), PrefValue::Float(value));
    }

    pub fn set_str(&mut self, key: &str, value: &str) {
        self.values
            .insert(key.to_string(), PrefValue::Str(value.to_string()));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityTier {
    Low,
    Medium,
    High,
}

impl QualityTier {
    pub fn as_str(self) -> &'static str {
        match self {
            QualityTier::Low => "Low",
            QualityTier::Medium => "Medium",
            QualityTier::High => "High",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Low" => Some(QualityTier::Low),
            "Medium" => Some(QualityTier::Medium),
            "High" => Some(QualityTier::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Spanish,
    French,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::English => "ENGLISH",
            Language::Spanish => "SPANISH",
            Language::French => "FRENCH",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ENGLISH" => Some(Language::English),
            "SPANISH" => Some(Language::Spanish),
            "FRENCH" => Some(Language::French),
            _ => None,
        }
    }
}

pub const RESOLUTION_OPTIONS: [&str; 3] = ["1280x720", "1920x1080", "800x600"];

/// Typed view over the preference store. Defaults match a fresh install.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub performance: QualityTier,
    pub resolution: String,
    pub language: Language,
    pub high_quality_shaders: bool,
    /// 0-100 slider.
    pub motion_blur: f32,
    pub render_quality: QualityTier,
    /// 0-100 sliders.
    pub master_volume: f32,
    pub sound_volume: f32,
    pub mute_all: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            performance: QualityTier::High,
            resolution: RESOLUTION_OPTIONS[0].to_string(),
            language: Language::English,
            high_quality_shaders: true,
            motion_blur: 54.0,
            render_quality: QualityTier::High,
            master_volume: 28.0,
            sound_volume: 85.0,
            mute_all: true,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS — cross-domain communication
// ═══════════════════════════════════════════════════════════════════════

/// Fired exactly once per inventory mutation call (add, remove, use,
/// capacity change, clear), after all slot mutation is done.
#[derive(Event, Debug, Clone)]
pub struct InventoryChangedEvent;

/// Fired after every equip, unequip, explicit switch, and durability
/// break. Carries the active weapon for the hotbar display.
#[derive(Event, Debug, Clone)]
pub struct WeaponSwitchedEvent {
    pub item_id: Option<ItemId>,
}

#[derive(Event, Debug, Clone)]
pub struct ItemPickupEvent {
    pub item_id: ItemId,
    pub quantity: u32,
}

#[derive(Event, Debug, Clone)]
pub struct ItemRemovedEvent {
    pub item_id: ItemId,
    pub quantity: u32,
}

/// Use the stack in a slot: consume food/potions, equip tools and gear.
#[derive(Event, Debug, Clone)]
pub struct UseItemEvent {
    pub slot: usize,
}

/// One unit left the bag and goes onto the equipment board.
#[derive(Event, Debug, Clone)]
pub struct EquipItemEvent {
    pub item_id: ItemId,
}

/// One unit of a potion/food item was consumed; vitals apply recovery.
#[derive(Event, Debug, Clone)]
pub struct ConsumeItemEvent {
    pub item_id: ItemId,
}

#[derive(Event, Debug, Clone)]
pub struct SwitchWeaponEvent {
    pub hand: WeaponHand,
}

#[derive(Event, Debug, Clone)]
pub struct UnequipWeaponEvent {
    pub hand: WeaponHand,
}

#[derive(Event, Debug, Clone)]
pub struct UnequipGearEvent {
    pub slot: GearSlot,
}

/// A swing aimed at a world position. Strikes an enemy in range first,
/// otherwise the targeted tile.
#[derive(Event, Debug, Clone)]
pub struct AttackCommandEvent {
    pub aim: Vec2,
}

#[derive(Event, Debug, Clone)]
pub struct TileDamageEvent {
    pub cell: CellPos,
    pub amount: f32,
}

#[derive(Event, Debug, Clone)]
pub struct TileDestroyedEvent {
    pub cell: CellPos,
    pub tile_id: TileId,
}

#[derive(Event, Debug, Clone)]
pub struct EnemyStruckEvent {
    pub target: Entity,
    pub amount: f32,
}

/// Drop loot at a position (tile yields, enemy loot).
#[derive(Event, Debug, Clone)]
pub struct SpawnDropEvent {
    pub item_id: ItemId,
    pub quantity: u32,
    pub pos: Vec2,
}

#[derive(Event, Debug, Clone)]
pub struct PlayerDamageEvent {
    pub amount: f32,
}

#[derive(Event, Debug, Clone)]
pub struct PlayerDiedEvent;

#[derive(Event, Debug, Clone)]
pub struct RestToggleEvent;

#[derive(Event, Debug, Clone)]
pub struct MapTransitionEvent {
    pub to_map: MapId,
}

/// Fired by the world after a map's tile grid has been rebuilt.
#[derive(Event, Debug, Clone)]
pub struct MapLoadedEvent {
    pub map: MapId,
}

#[derive(Event, Debug, Clone)]
pub struct SaveSettingsEvent;

#[derive(Event, Debug, Clone)]
pub struct ResetSettingsEvent;

// ═══════════════════════════════════════════════════════════════════════
// MATH
// ═══════════════════════════════════════════════════════════════════════

/// Clean up a possibly degenerate vector: non-finite components are
/// zeroed and coordinates clamped to the playable range.
pub fn sanitize_vec2(v: Vec2) -> Vec2 {
    let x = if v.x.is_finite() { v.x } else { 0.0 };
    let y = if v.y.is_finite() { v.y } else { 0.0 };
    Vec2::new(
        x.clamp(-POSITION_LIMIT, POSITION_LIMIT),
        y.clamp(-POSITION_LIMIT, POSITION_LIMIT),
    )
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const BASE_INVENTORY_SLOTS: u32 = 20;
pub const DEFAULT_MAX_STACK: u32 = 99;

pub const MAX_VITAL: f32 = 100.0;
pub const FATIGUE_DECAY_PER_SEC: f32 = 0.1;
pub const HUNGER_DECAY_PER_SEC: f32 = 0.2;
pub const THIRST_DECAY_PER_SEC: f32 = 0.3;
pub const REST_FATIGUE_RECOVERY_PER_SEC: f32 = 25.0;

pub const DEFAULT_POTION_HEALTH: f32 = 30.0;
pub const DEFAULT_POTION_THIRST: f32 = 20.0;
pub const DEFAULT_FOOD_HUNGER: f32 = 25.0;

pub const ATTACK_FATIGUE_COST: f32 = 5.0;
pub const ATTACK_HUNGER_COST: f32 = 2.0;
pub const ATTACK_THIRST_COST: f32 = 2.0;
pub const ATTACK_COOLDOWN_SECS: f32 = 0.5;
pub const UNARMED_DAMAGE: f32 = 10.0;
pub const DEFAULT_ATTACK_RANGE: f32 = 2.0;
pub const PICKUP_RANGE: f32 = 1.5;

pub const PLAYER_BASE_SPEED: f32 = 5.0;

pub const COLD_HEALTH_DRAIN_PER_SEC: f32 = 0.5;
pub const COLD_DECAY_SCALE: f32 = 2.0;
pub const BLIZZARD_INTERVAL_SECS: f32 = 30.0;
pub const BLIZZARD_DURATION_SECS: f32 = 10.0;
pub const BLIZZARD_SPEED_FACTOR: f32 = 0.5;

pub const DROP_LIFETIME_SECS: f32 = 2.0;
pub const DROP_GRAVITY: f32 = 5.0;
pub const DROP_X_DAMPING: f32 = 0.95;

pub const ENEMY_RESPAWN_DELAY_SECS: f32 = 10.0;
pub const POSITION_LIMIT: f32 = 1000.0;
