//! FloatText - Pooled Floating Combat Text Prototype
//!
//! Graphical demo by default: orbiting anchor points emit damage numbers
//! and rarity-colored item names above their world positions. With
//! `--headless <scenario.json>` a scripted scenario runs without graphics
//! and prints a run report.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use rand::Rng;

use floattext::cli;
use floattext::config::SpawnerConfig;
use floattext::headless::{run_scenario, ScenarioConfig};
use floattext::rarity::Rarity;
use floattext::spawner::{FloatingTextSpawner, StyleSelector};
use floattext::ui::{CameraProjector, FloatingTextPlugin};

fn main() {
    let args = cli::parse_args();

    if let Some(scenario_path) = args.headless {
        run_headless(&scenario_path, args.output.as_deref(), args.fps);
        return;
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "FloatText".to_string(),
                resolution: (1280.0, 720.0).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins((EguiPlugin, FloatingTextPlugin))
        .init_resource::<DemoSpawnTimer>()
        .add_systems(Startup, setup_demo)
        .add_systems(Update, (orbit_anchors, emit_demo_text))
        .run();
}

/// Run a scripted scenario without graphics and print the report.
fn run_headless(scenario_path: &std::path::Path, output: Option<&std::path::Path>, fps: Option<f32>) {
    let mut scenario = match ScenarioConfig::load_from_file(scenario_path) {
        Ok(scenario) => scenario,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(fps) = fps {
        scenario.fps = fps;
    }

    let report = match run_scenario(&scenario, &SpawnerConfig::load()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("Scenario complete:");
    println!("  frames:       {}", report.frames);
    println!("  spawned:      {}", report.spawned);
    println!("  released:     {}", report.released);
    println!("  peak active:  {}", report.peak_active);
    println!("  pool created: {}", report.pool_created);

    if let Some(path) = output {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    eprintln!("Error: failed to write report to {:?}: {}", path, e);
                    std::process::exit(1);
                }
                println!("Report written to {:?}", path);
            }
            Err(e) => {
                eprintln!("Error: failed to serialize report: {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// Marker for a demo anchor point that emits floating text.
#[derive(Component)]
struct DemoAnchor {
    /// Orbit angle in radians, advanced each frame
    angle: f32,
    radius: f32,
}

/// Repeating timer between demo spawns.
#[derive(Resource)]
struct DemoSpawnTimer(Timer);

impl Default for DemoSpawnTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(0.4, TimerMode::Repeating))
    }
}

fn setup_demo(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 5.0, 14.0).looking_at(Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
    ));

    for i in 0..3 {
        commands.spawn((
            DemoAnchor {
                angle: i as f32 * std::f32::consts::TAU / 3.0,
                radius: 4.0,
            },
            Transform::default(),
        ));
    }
}

/// Move the anchors in slow circles so the position tracking is visible.
fn orbit_anchors(time: Res<Time>, mut anchors: Query<(&mut DemoAnchor, &mut Transform)>) {
    for (mut anchor, mut transform) in anchors.iter_mut() {
        anchor.angle += 0.5 * time.delta_secs();
        transform.translation = Vec3::new(
            anchor.angle.cos() * anchor.radius,
            1.0,
            anchor.angle.sin() * anchor.radius,
        );
    }
}

/// Periodically emit a damage number or a rarity-colored item name above
/// a random anchor.
fn emit_demo_text(
    time: Res<Time>,
    mut timer: ResMut<DemoSpawnTimer>,
    mut spawner: ResMut<FloatingTextSpawner>,
    anchors: Query<&Transform, With<DemoAnchor>>,
    camera_query: Query<(&Camera, &GlobalTransform)>,
) {
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }
    let Ok((camera, camera_transform)) = camera_query.get_single() else {
        return;
    };

    let anchors: Vec<&Transform> = anchors.iter().collect();
    if anchors.is_empty() {
        return;
    }

    let mut rng = rand::thread_rng();
    let anchor = anchors[rng.gen_range(0..anchors.len())];
    let position = anchor.translation + Vec3::Y * 0.5;

    let projector = CameraProjector {
        camera,
        camera_transform,
    };

    if rng.gen_bool(0.7) {
        // Damage number via the preset table
        let amount = rng.gen_range(10..400);
        let preset = if amount > 300 { Some("crit".to_string()) } else { None };
        spawner.spawn(
            &projector,
            position,
            amount.to_string(),
            StyleSelector::Preset(preset),
        );
    } else {
        // Item drop via the rarity color table
        let tier = Rarity::ALL[rng.gen_range(0..Rarity::ALL.len())];
        spawner.spawn(
            &projector,
            position,
            format!("{} item!", tier.name()),
            StyleSelector::Rarity {
                tier,
                font_scale: 1.0 + tier as usize as f32 * 0.15,
            },
        );
    }
}
