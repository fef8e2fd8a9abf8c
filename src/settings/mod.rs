//! Settings domain: the flat preference store, the typed settings view
//! over it, and explicit persistence.
//!
//! The store is read once at startup and written only on an explicit
//! save; nothing flushes behind the player's back. Per-cell tile
//! destruction flags share the store with the settings keys, so saving
//! settings also persists world destruction.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::fs;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use crate::shared::*;

pub const PREFS_VERSION: u32 = 1;

/// Mixer floor handed to the audio collaborator.
pub const MUTED_DB: f32 = -80.0;

#[cfg(target_arch = "wasm32")]
const PREFS_STORAGE_KEY: &str = "frostreach_prefs";

// Store keys for the typed settings. Tile flags use `CellPos::pref_key`.
pub const KEY_PERFORMANCE: &str = "Performance";
pub const KEY_RESOLUTION: &str = "Resolution";
pub const KEY_LANGUAGE: &str = "Language";
pub const KEY_HIGH_QUALITY_SHADERS: &str = "HighQualityShaders";
pub const KEY_MOTION_BLUR: &str = "MotionBlur";
pub const KEY_RENDER_QUALITY: &str = "RenderQuality";
pub const KEY_MASTER_VOLUME: &str = "MasterVolume";
pub const KEY_SOUND_VOLUME: &str = "SoundVolume";
pub const KEY_MUTE_ALL: &str = "MuteAll";

// ═══════════════════════════════════════════════════════════════════════
// PLUGIN
// ═══════════════════════════════════════════════════════════════════════

pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_prefs)
            // Saving is allowed from menus and pause screens too.
            .add_systems(Update, (handle_save_settings, handle_reset_settings));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ON-DISK FORMAT
// ═══════════════════════════════════════════════════════════════════════

/// On-disk payload: a version stamp plus the flat store.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PrefsFile {
    version: u32,
    values: std::collections::HashMap<String, PrefValue>,
}

#[cfg(not(target_arch = "wasm32"))]
fn prefs_path() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));
    exe_dir.join("prefs.json")
}

#[cfg(not(target_arch = "wasm32"))]
fn write_prefs(store: &PrefStore) -> Result<(), String> {
    let file = PrefsFile {
        version: PREFS_VERSION,
        values: store.values.clone(),
    };
    let json =
        serde_json::to_string_pretty(&file).map_err(|e| format!("Serialization failed: {}", e))?;

    let path = prefs_path();
    // Write to a temp file first, then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, &json)
        .map_err(|e| format!("Write failed for {}: {}", tmp_path.display(), e))?;
    fs::rename(&tmp_path, &path).map_err(|e| format!("Rename failed: {}", e))?;

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_prefs() -> Result<PrefsFile, String> {
    let path = prefs_path();
    if !path.exists() {
        return Err("no preference file".to_string());
    }
    let json = fs::read_to_string(&path)
        .map_err(|e| format!("Read failed for {}: {}", path.display(), e))?;
    parse_prefs(&json)
}

#[cfg(target_arch = "wasm32")]
fn write_prefs(store: &PrefStore) -> Result<(), String> {
    let file = PrefsFile {
        version: PREFS_VERSION,
        values: store.values.clone(),
    };
    let json = serde_json::to_string(&file).map_err(|e| format!("Serialization failed: {}", e))?;
    local_storage()?
        .set_item(PREFS_STORAGE_KEY, &json)
        .map_err(|_| "localStorage write failed".to_string())
}

#[cfg(target_arch = "wasm32")]
fn read_prefs() -> Result<PrefsFile, String> {
    let json = local_storage()?
        .get_item(PREFS_STORAGE_KEY)
        .map_err(|_| "localStorage read failed".to_string())?
        .ok_or_else(|| "no stored preferences".to_string())?;
    parse_prefs(&json)
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| "localStorage unavailable".to_string())
}

fn parse_prefs(json: &str) -> Result<PrefsFile, String> {
    let file: PrefsFile =
        serde_json::from_str(json).map_err(|e| format!("Deserialization failed: {}", e))?;

    // Version check — future versions can add migration here
    if file.version != PREFS_VERSION {
        warn!(
            "Preference file has version {} but current version is {}. Attempting to load anyway.",
            file.version, PREFS_VERSION
        );
    }
    Ok(file)
}

// ═══════════════════════════════════════════════════════════════════════
// TYPED VIEW <-> STORE
// ═══════════════════════════════════════════════════════════════════════

/// Read the typed settings out of the store, falling back to the
/// documented default for every missing or malformed key. Unknown keys
/// are left alone.
pub fn settings_from_prefs(prefs: &PrefStore) -> GameSettings {
    let d = GameSettings::default();

    let resolution = prefs.get_str(KEY_RESOLUTION, &d.resolution);
    let resolution = if RESOLUTION_OPTIONS.contains(&resolution.as_str()) {
        resolution
    } else {
        d.resolution.clone()
    };

    GameSettings {
        performance: QualityTier::parse(&prefs.get_str(KEY_PERFORMANCE, d.performance.as_str()))
            .unwrap_or(d.performance),
        resolution,
        language: Language::parse(&prefs.get_str(KEY_LANGUAGE, d.language.as_str()))
            .unwrap_or(d.language),
        high_quality_shaders: prefs.get_int(KEY_HIGH_QUALITY_SHADERS, 1) != 0,
        motion_blur: prefs.get_float(KEY_MOTION_BLUR, d.motion_blur as f64) as f32,
        render_quality: QualityTier::parse(
            &prefs.get_str(KEY_RENDER_QUALITY, d.render_quality.as_str()),
        )
        .unwrap_or(d.render_quality),
        master_volume: prefs.get_float(KEY_MASTER_VOLUME, d.master_volume as f64) as f32,
        sound_volume: prefs.get_float(KEY_SOUND_VOLUME, d.sound_volume as f64) as f32,
        mute_all: prefs.get_int(KEY_MUTE_ALL, 1) != 0,
    }
}

/// Write the typed settings into the store. Bools are stored as 0/1.
pub fn settings_to_prefs(settings: &GameSettings, prefs: &mut PrefStore) {
    prefs.set_str(KEY_PERFORMANCE, settings.performance.as_str());
    prefs.set_str(KEY_RESOLUTION, &settings.resolution);
    prefs.set_str(KEY_LANGUAGE, settings.language.as_str());
    prefs.set_int(
        KEY_HIGH_QUALITY_SHADERS,
        settings.high_quality_shaders as i64,
    );
    prefs.set_float(KEY_MOTION_BLUR, settings.motion_blur as f64);
    prefs.set_str(KEY_RENDER_QUALITY, settings.render_quality.as_str());
    prefs.set_float(KEY_MASTER_VOLUME, settings.master_volume as f64);
    prefs.set_float(KEY_SOUND_VOLUME, settings.sound_volume as f64);
    prefs.set_int(KEY_MUTE_ALL, settings.mute_all as i64);
}

/// Slider value (0-100) to mixer decibels. Muted or silent sliders pin
/// to the floor.
pub fn volume_to_db(value: f32, muted: bool) -> f32 {
    if muted || value <= 0.0 {
        MUTED_DB
    } else {
        value.log10() * 20.0
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

fn load_prefs(mut prefs: ResMut<PrefStore>, mut settings: ResMut<GameSettings>) {
    match read_prefs() {
        Ok(file) => {
            prefs.values = file.values;
            info!("Settings: loaded {} stored keys", prefs.values.len());
        }
        Err(e) => {
            info!("Settings: {}, using defaults", e);
        }
    }
    *settings = settings_from_prefs(&prefs);
}

/// Explicit save: push the typed view into the store and flush it.
fn handle_save_settings(
    mut save_events: EventReader<SaveSettingsEvent>,
    settings: Res<GameSettings>,
    mut prefs: ResMut<PrefStore>,
) {
    if save_events.read().last().is_none() {
        return;
    }
    settings_to_prefs(&settings, &mut prefs);
    match write_prefs(&prefs) {
        Ok(()) => info!("Settings: saved"),
        Err(e) => warn!("Settings: save FAILED: {}", e),
    }
}

/// Restore every documented default, then save.
fn handle_reset_settings(
    mut reset_events: EventReader<ResetSettingsEvent>,
    mut settings: ResMut<GameSettings>,
    mut prefs: ResMut<PrefStore>,
) {
    if reset_events.read().last().is_none() {
        return;
    }
    *settings = GameSettings::default();
    settings_to_prefs(&settings, &mut prefs);
    match write_prefs(&prefs) {
        Ok(()) => info!("Settings: reset to defaults"),
        Err(e) => warn!("Settings: reset save FAILED: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_yields_documented_defaults() {
        let prefs = PrefStore::default();
        assert_eq!(settings_from_prefs(&prefs), GameSettings::default());
    }

    #[test]
    fn typed_view_round_trips_through_the_store() {
        let settings = GameSettings {
            performance: QualityTier::Low,
            resolution: "1920x1080".to_string(),
            language: Language::Spanish,
            high_quality_shaders: false,
            motion_blur: 12.5,
            render_quality: QualityTier::Medium,
            master_volume: 70.0,
            sound_volume: 15.0,
            mute_all: false,
        };

        let mut prefs = PrefStore::default();
        settings_to_prefs(&settings, &mut prefs);
        assert_eq!(settings_from_prefs(&prefs), settings);
    }

    #[test]
    fn malformed_keys_fall_back_per_key() {
        let mut prefs = PrefStore::default();
        prefs.set_str(KEY_LANGUAGE, "KLINGON");
        prefs.set_str(KEY_RESOLUTION, "640x480");
        prefs.set_float(KEY_MASTER_VOLUME, 3.0);

        let settings = settings_from_prefs(&prefs);
        assert_eq!(settings.language, Language::English);
        assert_eq!(settings.resolution, "1280x720");
        assert_eq!(settings.master_volume, 3.0);
    }

    #[test]
    fn store_keeps_keys_it_does_not_understand() {
        let mut prefs = PrefStore::default();
        prefs.set_int("Tile_4_-2_0", 0);
        prefs.set_str("SomeModKey", "whatever");

        let settings = settings_from_prefs(&prefs);
        settings_to_prefs(&settings, &mut prefs);

        assert_eq!(prefs.get_int("Tile_4_-2_0", 1), 0);
        assert_eq!(prefs.get_str("SomeModKey", ""), "whatever");
    }

    #[test]
    fn volume_mapping_matches_the_mixer_curve() {
        assert_eq!(volume_to_db(100.0, false), 40.0);
        assert_eq!(volume_to_db(10.0, false), 20.0);
        assert!((volume_to_db(28.0, false) - 28.943161).abs() < 1e-4);
    }

    #[test]
    fn muted_or_silent_pins_to_the_floor() {
        assert_eq!(volume_to_db(85.0, true), MUTED_DB);
        assert_eq!(volume_to_db(0.0, false), MUTED_DB);
        assert_eq!(volume_to_db(-5.0, false), MUTED_DB);
    }

    #[test]
    fn prefs_file_parses_with_version_stamp() {
        let json = r#"{
            "version": 1,
            "values": {
                "Performance": "Low",
                "MotionBlur": 33.0,
                "MuteAll": 0,
                "Tile_1_2_0": 0
            }
        }"#;
        let file = parse_prefs(json).unwrap();
        assert_eq!(file.version, PREFS_VERSION);

        let mut prefs = PrefStore::default();
        prefs.values = file.values;
        assert_eq!(prefs.get_str(KEY_PERFORMANCE, "High"), "Low");
        assert_eq!(prefs.get_float(KEY_MOTION_BLUR, 54.0), 33.0);
        assert_eq!(prefs.get_int(KEY_MUTE_ALL, 1), 0);
        assert_eq!(prefs.get_int("Tile_1_2_0", 1), 0);
    }
}
