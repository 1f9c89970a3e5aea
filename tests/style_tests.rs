//! Unit tests for the style preset registry
//!
//! These tests verify that:
//! - Known names resolve to exactly the registered color and size
//! - Unknown or missing names fall back to the built-in default
//! - Duplicate registrations are rejected deterministically

use bevy::prelude::*;
use floattext::style::{StylePresetRegistry, DEFAULT_FONT_SIZE, DEFAULT_PRESET_NAME};

fn registry_with_crit() -> StylePresetRegistry {
    let mut registry = StylePresetRegistry::new();
    registry
        .register("crit", Color::srgba(1.0, 0.85, 0.1, 1.0), 40)
        .expect("first registration should succeed");
    registry
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn test_new_registry_contains_only_default() {
    let registry = StylePresetRegistry::new();
    assert_eq!(registry.len(), 1);

    let preset = registry.resolve(Some(DEFAULT_PRESET_NAME));
    assert_eq!(preset.color, Color::WHITE);
    assert_eq!(preset.font_size, DEFAULT_FONT_SIZE);
}

#[test]
fn test_known_name_resolves_to_registered_values() {
    let registry = registry_with_crit();
    let preset = registry.resolve(Some("crit"));
    assert_eq!(preset.name, "crit");
    assert_eq!(preset.color, Color::srgba(1.0, 0.85, 0.1, 1.0));
    assert_eq!(preset.font_size, 40);
}

#[test]
fn test_unknown_name_falls_back_to_default() {
    let registry = registry_with_crit();
    let preset = registry.resolve(Some("no_such_preset"));
    assert_eq!(preset.name, DEFAULT_PRESET_NAME);
    assert_eq!(preset.color, Color::WHITE);
    assert_eq!(preset.font_size, 30);
}

#[test]
fn test_missing_name_falls_back_to_default() {
    let registry = registry_with_crit();
    let preset = registry.resolve(None);
    assert_eq!(preset.name, DEFAULT_PRESET_NAME);
}

// =============================================================================
// Registration
// =============================================================================

#[test]
fn test_duplicate_registration_is_rejected() {
    let mut registry = registry_with_crit();
    let result = registry.register("crit", Color::BLACK, 12);
    assert!(result.is_err(), "duplicate name must be rejected");

    // The original entry is untouched
    let preset = registry.resolve(Some("crit"));
    assert_eq!(preset.font_size, 40);
}

#[test]
fn test_default_name_cannot_be_overridden() {
    let mut registry = StylePresetRegistry::new();
    let result = registry.register(DEFAULT_PRESET_NAME, Color::BLACK, 12);
    assert!(result.is_err());
    assert_eq!(registry.resolve(None).color, Color::WHITE);
}

#[test]
fn test_multiple_distinct_registrations() {
    let mut registry = StylePresetRegistry::new();
    registry.register("damage", Color::WHITE, 30).unwrap();
    registry
        .register("heal", Color::srgba(0.2, 0.9, 0.2, 1.0), 30)
        .unwrap();
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.resolve(Some("heal")).color, Color::srgba(0.2, 0.9, 0.2, 1.0));
}
