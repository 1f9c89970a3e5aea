//! Floating text style presets
//!
//! Named bundles of color and font size that callers can request when
//! spawning text. The registry is populated once at startup and read-only
//! afterwards. Lookups never fail: unknown or missing names resolve to the
//! built-in `"_default"` preset (white, size 30).

use bevy::prelude::*;
use std::collections::HashMap;

/// Reserved name of the built-in fallback preset.
pub const DEFAULT_PRESET_NAME: &str = "_default";

/// Font size of the built-in fallback preset.
pub const DEFAULT_FONT_SIZE: u32 = 30;

/// A named floating text style: color and font size.
#[derive(Debug, Clone, PartialEq)]
pub struct StylePreset {
    /// Unique preset name used as the lookup key
    pub name: String,
    /// Text tint
    pub color: Color,
    /// Base font size in points, before any animation scaling
    pub font_size: u32,
}

impl StylePreset {
    fn fallback() -> Self {
        Self {
            name: DEFAULT_PRESET_NAME.to_string(),
            color: Color::WHITE,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Read-mostly collection of style presets keyed by name.
///
/// Always contains the `"_default"` entry, synthesized at construction.
/// Registration happens during setup only; duplicate names are rejected
/// rather than silently shadowing an earlier entry.
#[derive(Debug, Clone)]
pub struct StylePresetRegistry {
    presets: HashMap<String, StylePreset>,
}

impl Default for StylePresetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StylePresetRegistry {
    /// Create a registry containing only the fallback preset.
    pub fn new() -> Self {
        let mut presets = HashMap::new();
        presets.insert(DEFAULT_PRESET_NAME.to_string(), StylePreset::fallback());
        Self { presets }
    }

    /// Register a new preset.
    ///
    /// Returns an error if the name is already taken, including the
    /// reserved `"_default"` name.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        color: Color,
        font_size: u32,
    ) -> Result<(), String> {
        let name = name.into();
        if self.presets.contains_key(&name) {
            return Err(format!("preset '{}' is already registered", name));
        }
        self.presets.insert(
            name.clone(),
            StylePreset {
                name,
                color,
                font_size,
            },
        );
        Ok(())
    }

    /// Look up a preset by name.
    ///
    /// `None` or an unknown name returns the fallback preset; this method
    /// never fails.
    pub fn resolve(&self, name: Option<&str>) -> &StylePreset {
        name.and_then(|n| self.presets.get(n))
            .unwrap_or_else(|| &self.presets[DEFAULT_PRESET_NAME])
    }

    /// Number of presets, including the fallback.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
