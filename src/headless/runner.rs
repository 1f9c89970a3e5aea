//! Headless scenario execution
//!
//! Drives the floating text spawner with a fixed timestep and no graphics.
//! Each simulated frame spawns any due events, ticks every in-flight
//! animation, and appends one log line per visible label. The run ends
//! when all events have fired and every label is back in the pool.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::config::SpawnerConfig;
use crate::spawner::{FloatingTextSpawner, ScreenProjector};

use super::config::ScenarioConfig;

/// Pixels per world unit for the flat headless projection.
const FLAT_PIXELS_PER_UNIT: f32 = 32.0;

/// Screen center of the simulated 1280x720 viewport.
const FLAT_SCREEN_CENTER: Vec2 = Vec2::new(640.0, 360.0);

/// Fixed overhead projection used when no camera exists: world X/Y map
/// linearly onto the screen plane and depth is ignored.
pub struct FlatProjector;

impl ScreenProjector for FlatProjector {
    fn project(&self, world: Vec3) -> Option<Vec2> {
        Some(Vec2::new(
            FLAT_SCREEN_CENTER.x + world.x * FLAT_PIXELS_PER_UNIT,
            FLAT_SCREEN_CENTER.y - world.y * FLAT_PIXELS_PER_UNIT,
        ))
    }
}

/// Result of a completed headless scenario
///
/// Provides programmatic access to run statistics for testing and analysis.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    /// Simulated frames executed
    pub frames: u32,
    /// Total texts spawned
    pub spawned: usize,
    /// Texts whose labels were returned to the pool
    pub released: usize,
    /// Labels the pool created over the whole run (high-water mark)
    pub pool_created: usize,
    /// Maximum number of simultaneously active texts
    pub peak_active: usize,
    /// Random seed used (if deterministic jitter was requested)
    pub random_seed: Option<u64>,
    /// One line per visible label per frame
    pub frame_log: Vec<String>,
}

/// Run a scripted scenario to completion.
///
/// The spawner is built from `spawner_config` (with the scenario's
/// optional duration override applied) and driven at the scenario's fixed
/// timestep until every spawned label has been released.
pub fn run_scenario(
    scenario: &ScenarioConfig,
    spawner_config: &SpawnerConfig,
) -> Result<ScenarioReport, String> {
    scenario.validate()?;

    let mut spawner_config = spawner_config.clone();
    if let Some(duration) = scenario.duration {
        spawner_config.duration = duration;
    }
    let mut spawner = spawner_config.build()?;

    let mut events = scenario.events.clone();
    events.sort_by(|a, b| a.time.total_cmp(&b.time));

    let mut rng = scenario
        .random_seed
        .map(StdRng::seed_from_u64)
        .unwrap_or_else(StdRng::from_entropy);

    let dt = 1.0 / scenario.fps;
    let last_event_time = events.last().map(|e| e.time).unwrap_or(0.0);
    // Generous upper bound so a stuck animation cannot loop forever:
    // time for every event plus two full animations of slack.
    let max_frames = ((last_event_time + spawner.duration().max(0.0) * 2.0 + 2.0)
        * scenario.fps)
        .ceil() as u32;

    let projector = FlatProjector;
    let mut next_event = 0;
    let mut spawned = 0;
    let mut peak_active = 0;
    let mut frame_log = Vec::new();
    let mut frames = 0;

    while frames < max_frames {
        let now = frames as f32 * dt;

        // Fire every event due this frame
        while next_event < events.len() && events[next_event].time <= now {
            let event = &events[next_event];
            let mut position = Vec3::from_array(event.position);
            if scenario.jitter > 0.0 {
                position.x += rng.gen_range(-scenario.jitter..=scenario.jitter);
                position.y += rng.gen_range(-scenario.jitter..=scenario.jitter);
            }
            spawner.spawn(&projector, position, event.text.clone(), event.style_selector());
            spawned += 1;
            next_event += 1;
        }

        spawner.tick(dt, &projector);
        peak_active = peak_active.max(spawner.active_count());

        for label in spawner.visible_labels() {
            frame_log.push(format!(
                "[frame {:04}] t={:.3} \"{}\" pos=({:.1}, {:.1}) scale={:.3}",
                frames, now, label.text, label.screen_position.x, label.screen_position.y,
                label.scale.x,
            ));
        }

        frames += 1;

        if next_event >= events.len() && spawner.active_count() == 0 {
            break;
        }
    }

    if spawner.active_count() > 0 {
        warn!(
            "scenario ended with {} animations still active after {} frames",
            spawner.active_count(),
            frames
        );
    }

    let report = ScenarioReport {
        frames,
        spawned,
        released: spawned - spawner.active_count(),
        pool_created: spawner.pool().created(),
        peak_active,
        random_seed: scenario.random_seed,
        frame_log,
    };

    if let Some(path) = &scenario.output_path {
        std::fs::write(path, report.frame_log.join("\n"))
            .map_err(|e| format!("Failed to write frame log to {}: {}", path, e))?;
        info!("Wrote frame log to {}", path);
    }

    Ok(report)
}
