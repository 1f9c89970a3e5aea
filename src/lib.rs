//! FloatText - Pooled Floating Combat Text Prototype
//!
//! Two small presentation utilities: a pooled, curve-animated floating
//! text spawner that tracks world positions, and a fixed rarity-to-color
//! lookup table for item tiers.
//!
//! This library exposes the core modules for testing and reuse.

pub mod cli;
pub mod config;
pub mod curve;
pub mod headless;
pub mod label;
pub mod rarity;
pub mod spawner;
pub mod style;
pub mod ui;

// Re-export commonly used types
pub use config::SpawnerConfig;
pub use curve::{Curve, ScaleCurve};
pub use headless::{run_scenario, ScenarioConfig, ScenarioReport};
pub use label::{LabelDefaults, LabelId, LabelPool, TextLabel};
pub use rarity::Rarity;
pub use spawner::{FloatingTextSpawner, ScreenProjector, StyleSelector};
pub use style::{StylePreset, StylePresetRegistry};
pub use ui::FloatingTextPlugin;
