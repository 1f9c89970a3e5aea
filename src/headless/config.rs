//! JSON configuration parsing for headless mode
//!
//! Parses JSON scenario files describing timed spawn events and converts
//! the style fields into the spawner's selector types.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::rarity::Rarity;
use crate::spawner::StyleSelector;

/// One scripted spawn in a headless scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnEvent {
    /// Scenario time in seconds at which to spawn
    pub time: f32,
    /// World anchor position
    pub position: [f32; 3],
    /// Text to display
    pub text: String,
    /// Named style preset (preset-table variant)
    #[serde(default)]
    pub preset: Option<String>,
    /// Rarity tier name (enum-color variant); mutually exclusive with `preset`
    #[serde(default)]
    pub rarity: Option<String>,
    /// Font size multiplier, used with `rarity` (default: 1.0)
    #[serde(default = "default_font_scale")]
    pub font_scale: f32,
}

fn default_font_scale() -> f32 {
    1.0
}

/// Headless scenario loaded from JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Timed spawn events (any order; the runner sorts by time)
    pub events: Vec<SpawnEvent>,
    /// Simulated frames per second (default: 60)
    #[serde(default = "default_fps")]
    pub fps: f32,
    /// Animation duration override in seconds (default: use spawner config)
    #[serde(default)]
    pub duration: Option<f32>,
    /// Random position jitter radius in world units (default: 0, disabled)
    #[serde(default)]
    pub jitter: f32,
    /// Random seed for deterministic jitter reproduction
    #[serde(default)]
    pub random_seed: Option<u64>,
    /// Custom output path for the frame log (optional)
    #[serde(default)]
    pub output_path: Option<String>,
}

fn default_fps() -> f32 {
    60.0
}

impl ScenarioConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read scenario file: {}", e))?;

        let config: ScenarioConfig = serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse JSON: {}", e))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.events.is_empty() {
            return Err("scenario must contain at least one event".to_string());
        }
        if self.fps <= 0.0 {
            return Err(format!("fps must be positive, got {}", self.fps));
        }
        if self.jitter < 0.0 {
            return Err(format!("jitter must be non-negative, got {}", self.jitter));
        }

        for (index, event) in self.events.iter().enumerate() {
            if event.time < 0.0 {
                return Err(format!("event {} has negative time {}", index, event.time));
            }
            if event.preset.is_some() && event.rarity.is_some() {
                return Err(format!(
                    "event {} sets both 'preset' and 'rarity'; pick one",
                    index
                ));
            }
            if let Some(name) = &event.rarity {
                Self::parse_rarity(name)?;
            }
            if event.font_scale <= 0.0 {
                return Err(format!(
                    "event {} has non-positive font_scale {}",
                    index, event.font_scale
                ));
            }
        }

        Ok(())
    }

    /// Parse a rarity tier name
    pub fn parse_rarity(name: &str) -> Result<Rarity, String> {
        Rarity::ALL
            .into_iter()
            .find(|tier| tier.name() == name)
            .ok_or_else(|| {
                format!(
                    "Unknown rarity '{}'. Valid tiers: Common, Uncommon, Rare, Epic, Legendary",
                    name
                )
            })
    }
}

impl SpawnEvent {
    /// Convert the authored style fields into a spawner selector.
    ///
    /// Call only after `validate()`; an unparsable rarity falls back to
    /// the default preset here rather than panicking.
    pub fn style_selector(&self) -> StyleSelector {
        if let Some(name) = &self.rarity {
            if let Ok(tier) = ScenarioConfig::parse_rarity(name) {
                return StyleSelector::Rarity {
                    tier,
                    font_scale: self.font_scale,
                };
            }
        }
        StyleSelector::Preset(self.preset.clone())
    }
}
