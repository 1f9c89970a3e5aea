//! Floating text overlay
//!
//! Bevy plugin that drives the spawner once per rendered frame and paints
//! every visible label as a 2D egui overlay: world anchor projected
//! through the active camera, centered text with an 8-direction black
//! outline, scaled by the animation curve.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::SpawnerConfig;
use crate::spawner::{FloatingTextSpawner, ScreenProjector};

/// Plugin wiring the floating text spawner into the frame loop.
///
/// Inserts a [`FloatingTextSpawner`] resource built from the RON config
/// (falling back to defaults when the config is invalid) and registers
/// the tick and render systems. Callers spawn text by taking the resource
/// as an explicit system parameter.
pub struct FloatingTextPlugin;

impl Plugin for FloatingTextPlugin {
    fn build(&self, app: &mut App) {
        let config = SpawnerConfig::load();
        let spawner = match config.build() {
            Ok(spawner) => spawner,
            Err(e) => {
                warn!("Invalid floating text config ({}), using defaults", e);
                SpawnerConfig::default()
                    .build()
                    .unwrap_or_else(|e| panic!("default floating text config is invalid: {}", e))
            }
        };
        app.insert_resource(spawner)
            .add_systems(Update, (tick_floating_text, render_floating_text).chain());
    }
}

/// Projection through a Bevy camera's viewport.
pub struct CameraProjector<'a> {
    pub camera: &'a Camera,
    pub camera_transform: &'a GlobalTransform,
}

impl ScreenProjector for CameraProjector<'_> {
    fn project(&self, world: Vec3) -> Option<Vec2> {
        self.camera
            .world_to_viewport(self.camera_transform, world)
            .ok()
    }
}

/// Advance all in-flight text animations by this frame's delta time.
fn tick_floating_text(
    time: Res<Time>,
    mut spawner: ResMut<FloatingTextSpawner>,
    camera_query: Query<(&Camera, &GlobalTransform)>,
) {
    let Ok((camera, camera_transform)) = camera_query.get_single() else {
        return;
    };

    let projector = CameraProjector {
        camera,
        camera_transform,
    };
    spawner.tick(time.delta_secs(), &projector);
}

/// Paint every visible label as a 2D overlay.
fn render_floating_text(mut contexts: EguiContexts, spawner: Res<FloatingTextSpawner>) {
    // Use try_ctx_mut to gracefully handle window close
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("floating_text_overlay"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .show(ctx, |ui| {
            for label in spawner.visible_labels() {
                // Scale is uniform; the X axis carries the curve value.
                let size = label.font_size * label.scale.x;
                if size <= 0.0 {
                    // Negative curve values would mirror the glyphs; the
                    // painter cannot rasterize that, so skip the frame.
                    continue;
                }

                let srgba = label.color.to_srgba();
                let color = egui::Color32::from_rgba_unmultiplied(
                    (srgba.red * 255.0) as u8,
                    (srgba.green * 255.0) as u8,
                    (srgba.blue * 255.0) as u8,
                    (srgba.alpha * 255.0) as u8,
                );
                let outline_color = egui::Color32::BLACK;

                // egui's built-in fonts have no bold/italic faces; the
                // label's font_style is carried for renderers that do.
                let font_id = egui::FontId::proportional(size);
                let pos = egui::pos2(label.screen_position.x, label.screen_position.y);

                // Outline first: 8 directions for a smooth edge
                let o = label.outline_width * size;
                for (dx, dy) in [
                    (-o, 0.0),
                    (o, 0.0),
                    (0.0, -o),
                    (0.0, o),
                    (-o * 0.7, -o * 0.7),
                    (o * 0.7, -o * 0.7),
                    (-o * 0.7, o * 0.7),
                    (o * 0.7, o * 0.7),
                ] {
                    ui.painter().text(
                        egui::pos2(pos.x + dx, pos.y + dy),
                        egui::Align2::CENTER_CENTER,
                        &label.text,
                        font_id.clone(),
                        outline_color,
                    );
                }

                ui.painter().text(
                    pos,
                    egui::Align2::CENTER_CENTER,
                    &label.text,
                    font_id,
                    color,
                );
            }
        });
}
