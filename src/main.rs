mod shared;
mod player;
mod inventory;
mod equipment;
mod world;
mod enemies;
mod climate;
mod settings;
mod data;

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use shared::*;

/// Simulation tick rate for the headless runner.
const TICK_SECONDS: f64 = 1.0 / 60.0;

fn main() {
    App::new()
        // Headless core: fixed-cadence schedule runner, no window or GPU.
        .add_plugins(
            MinimalPlugins
                .set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(TICK_SECONDS))),
        )
        .add_plugins(LogPlugin::default())
        .add_plugins(StatesPlugin)
        // Game state
        .init_state::<GameState>()
        // Shared resources
        .init_resource::<Inventory>()
        .init_resource::<Equipment>()
        .init_resource::<ItemRegistry>()
        .init_resource::<TileRegistry>()
        .init_resource::<ResourceGrid>()
        .init_resource::<CurrentMap>()
        .init_resource::<RespawnAnchors>()
        .init_resource::<DropSettings>()
        .init_resource::<Vitals>()
        .init_resource::<VitalRates>()
        .init_resource::<RestState>()
        .init_resource::<PlayerSpeed>()
        .init_resource::<PrefStore>()
        .init_resource::<GameSettings>()
        // Events
        .add_event::<InventoryChangedEvent>()
        .add_event::<WeaponSwitchedEvent>()
        .add_event::<ItemPickupEvent>()
        .add_event::<ItemRemovedEvent>()
        .add_event::<UseItemEvent>()
        .add_event::<EquipItemEvent>()
        .add_event::<ConsumeItemEvent>()
        .add_event::<SwitchWeaponEvent>()
        .add_event::<UnequipWeaponEvent>()
        .add_event::<UnequipGearEvent>()
        .add_event::<AttackCommandEvent>()
        .add_event::<TileDamageEvent>()
        .add_event::<TileDestroyedEvent>()
        .add_event::<EnemyStruckEvent>()
        .add_event::<SpawnDropEvent>()
        .add_event::<PlayerDamageEvent>()
        .add_event::<PlayerDiedEvent>()
        .add_event::<RestToggleEvent>()
        .add_event::<MapTransitionEvent>()
        .add_event::<MapLoadedEvent>()
        .add_event::<SaveSettingsEvent>()
        .add_event::<ResetSettingsEvent>()
        // Domain plugins
        .add_plugins(player::PlayerPlugin)
        .add_plugins(inventory::InventoryPlugin)
        .add_plugins(equipment::EquipmentPlugin)
        .add_plugins(world::WorldPlugin)
        .add_plugins(enemies::EnemiesPlugin)
        .add_plugins(climate::ClimatePlugin)
        .add_plugins(settings::SettingsPlugin)
        // Data loading
        .add_plugins(data::DataPlugin)
        .run();
}
