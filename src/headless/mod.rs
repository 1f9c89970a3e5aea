//! Headless mode for agentic testing
//!
//! Runs scripted floating text scenarios without any graphical output:
//! a fixed-timestep loop drives the spawner with a flat projector and
//! records a frame-by-frame log plus summary statistics.
//!
//! ## Usage
//!
//! ```bash
//! # Run a headless scenario
//! cargo run --release -- --headless scenario.json
//! ```
//!
//! ## JSON Configuration
//!
//! ```json
//! {
//!   "events": [
//!     { "time": 0.0, "position": [0.0, 1.0, 0.0], "text": "154", "preset": "crit" },
//!     { "time": 0.1, "position": [2.0, 1.0, 0.0], "text": "Sword", "rarity": "Epic" }
//!   ],
//!   "fps": 60.0,
//!   "random_seed": 42
//! }
//! ```

pub mod config;
pub mod runner;

pub use config::{ScenarioConfig, SpawnEvent};
pub use runner::{run_scenario, ScenarioReport};
