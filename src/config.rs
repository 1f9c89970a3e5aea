//! Spawner configuration
//!
//! Designer-set fields for the floating text system: animation duration,
//! scale curve keyframes, label outline/style defaults, and the preset
//! list. Loaded from a RON file at startup; a missing or unparsable file
//! falls back to defaults with a warning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::curve::Curve;
use crate::label::{FontStyle, LabelDefaults};
use crate::spawner::FloatingTextSpawner;
use crate::style::StylePresetRegistry;

/// One preset entry as authored in the config file.
///
/// Color is a plain `[r, g, b, a]` array in 0..1 so the file stays easy
/// to hand-edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetEntry {
    pub name: String,
    pub color: [f32; 4],
    pub font_size: u32,
}

/// Designer configuration for the floating text spawner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnerConfig {
    /// Animation duration in seconds
    pub duration: f32,
    /// Scale-over-time keyframes as (normalized time, scale) pairs
    pub curve: Vec<(f32, f32)>,
    /// Label outline width as a fraction of the font size
    pub outline_width: f32,
    pub font_style: FontStyle,
    /// Named style presets; names must be unique and `"_default"` is reserved
    pub presets: Vec<PresetEntry>,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            duration: 0.5,
            curve: Curve::default().keys().to_vec(),
            outline_width: 0.15,
            font_style: FontStyle::Normal,
            presets: vec![
                PresetEntry {
                    name: "damage".to_string(),
                    color: [1.0, 1.0, 1.0, 1.0],
                    font_size: 30,
                },
                PresetEntry {
                    name: "crit".to_string(),
                    color: [1.0, 0.85, 0.1, 1.0],
                    font_size: 40,
                },
                PresetEntry {
                    name: "heal".to_string(),
                    color: [0.2, 0.9, 0.2, 1.0],
                    font_size: 30,
                },
            ],
        }
    }
}

impl SpawnerConfig {
    /// Get the path to the config file
    fn config_path() -> PathBuf {
        PathBuf::from("floating_text.ron")
    }

    /// Load configuration from file, or return default if file doesn't exist
    pub fn load() -> Self {
        let path = Self::config_path();
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(contents) => match ron::from_str(&contents) {
                    Ok(config) => {
                        info!("Loaded floating text config from {:?}", path);
                        config
                    }
                    Err(e) => {
                        warn!("Failed to parse floating text config: {}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    warn!("Failed to read floating text config: {}", e);
                    Self::default()
                }
            }
        } else {
            info!("No floating text config found, using defaults");
            Self::default()
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::config_path();
        let contents = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        fs::write(&path, contents)?;
        info!("Saved floating text config to {:?}", path);
        Ok(())
    }

    /// Validate the config and build a spawner from it.
    ///
    /// Fails on an empty curve or a duplicate preset name; duplicates are
    /// a configuration error, never a silent override.
    pub fn build(&self) -> Result<FloatingTextSpawner, String> {
        let curve = Curve::new(self.curve.clone())?;

        let mut presets = StylePresetRegistry::new();
        for entry in &self.presets {
            let [r, g, b, a] = entry.color;
            presets.register(
                entry.name.clone(),
                Color::srgba(r, g, b, a),
                entry.font_size,
            )?;
        }

        let defaults = LabelDefaults {
            outline_width: self.outline_width,
            font_style: self.font_style,
        };

        Ok(FloatingTextSpawner::new(
            self.duration,
            curve,
            presets,
            defaults,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds() {
        let spawner = SpawnerConfig::default().build().unwrap();
        assert_eq!(spawner.duration(), 0.5);
        // three authored presets plus the synthesized fallback
        assert_eq!(spawner.presets().len(), 4);
    }

    #[test]
    fn test_duplicate_preset_name_is_rejected() {
        let mut config = SpawnerConfig::default();
        config.presets.push(PresetEntry {
            name: "damage".to_string(),
            color: [1.0, 0.0, 0.0, 1.0],
            font_size: 20,
        });
        assert!(config.build().is_err());
    }

    #[test]
    fn test_reserved_default_name_is_rejected() {
        let mut config = SpawnerConfig::default();
        config.presets.push(PresetEntry {
            name: "_default".to_string(),
            color: [0.0, 0.0, 0.0, 1.0],
            font_size: 10,
        });
        assert!(config.build().is_err());
    }

    #[test]
    fn test_empty_curve_is_rejected() {
        let config = SpawnerConfig {
            curve: vec![],
            ..Default::default()
        };
        assert!(config.build().is_err());
    }

    #[test]
    fn test_config_round_trips_through_ron() {
        let config = SpawnerConfig::default();
        let text = ron::ser::to_string_pretty(&config, Default::default()).unwrap();
        let parsed: SpawnerConfig = ron::from_str(&text).unwrap();
        assert_eq!(parsed.duration, config.duration);
        assert_eq!(parsed.presets.len(), config.presets.len());
    }
}
