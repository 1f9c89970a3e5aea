//! Floating text spawner
//!
//! Owns the label pool and every in-flight text animation. A spawn is
//! fire-and-forget: it borrows a pooled label, applies the resolved style
//! and the projected screen position, then the per-frame [`tick`] drives
//! the animation until the fixed duration elapses and the label goes back
//! to the pool.
//!
//! The spawner is an explicit dependency (a Bevy `Resource` in graphical
//! mode, a plain value in headless mode), never a global singleton.
//!
//! [`tick`]: FloatingTextSpawner::tick

use bevy::prelude::*;
use smallvec::SmallVec;

use crate::curve::ScaleCurve;
use crate::label::{LabelDefaults, LabelId, LabelPool, TextLabel};
use crate::rarity::Rarity;
use crate::style::{StylePresetRegistry, DEFAULT_FONT_SIZE};

/// Horizontal stagger spread in world units for overlapping spawns.
pub const STAGGER_HORIZONTAL_SPREAD: f32 = 1.2;

/// Vertical stagger spread in world units for overlapping spawns.
pub const STAGGER_VERTICAL_SPREAD: f32 = 0.8;

/// Projects a world position into screen space through the active view.
///
/// Returns `None` when the point has no on-screen projection (behind the
/// camera, no viewport); the label then keeps its last projected position.
pub trait ScreenProjector {
    fn project(&self, world: Vec3) -> Option<Vec2>;
}

/// How the caller selects the style of a spawned text.
#[derive(Debug, Clone)]
pub enum StyleSelector {
    /// Named preset from the registry; `None` or an unknown name resolves
    /// to the default preset.
    Preset(Option<String>),
    /// Rarity tier color with a numeric multiplier on the default font size.
    Rarity { tier: Rarity, font_scale: f32 },
}

/// Style after resolution: the single form the animation engine consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle {
    pub color: Color,
    pub font_size: f32,
}

/// Animation phase of one in-flight text.
///
/// Each phase boundary is a rendered frame: the initial state is committed
/// for one frame before the timer starts, and the final state stays on
/// screen for one frame before the label is hidden and released. This
/// guarantees at least one visible frame even when the duration is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Initial state applied, waiting one frame before the timer starts
    Commit,
    /// Timer running; scale follows the curve each frame
    Animate,
    /// Timer done; final frame stays on screen until the next tick
    Linger,
}

/// One in-flight floating text animation.
#[derive(Debug)]
struct ActiveText {
    label: LabelId,
    /// World anchor the label tracks; re-projected every frame so a moving
    /// anchor drags the label
    world_position: Vec3,
    elapsed: f32,
    phase: Phase,
}

/// Pooled, curve-animated floating text above world positions.
#[derive(Resource)]
pub struct FloatingTextSpawner {
    pool: LabelPool,
    presets: StylePresetRegistry,
    duration: f32,
    curve: Box<dyn ScaleCurve + Send + Sync>,
    active: SmallVec<[ActiveText; 8]>,
    /// Cycling index into the stagger offset pattern
    next_stagger: usize,
}

impl FloatingTextSpawner {
    pub fn new(
        duration: f32,
        curve: impl ScaleCurve + Send + Sync + 'static,
        presets: StylePresetRegistry,
        defaults: LabelDefaults,
    ) -> Self {
        Self {
            pool: LabelPool::new(defaults),
            presets,
            duration,
            curve: Box::new(curve),
            active: SmallVec::new(),
            next_stagger: 0,
        }
    }

    /// Spawn a floating text above `world_position`.
    ///
    /// Acquires a pooled label, applies the text, the resolved style and
    /// the initial projected position, and marks it visible. The animation
    /// then runs through [`tick`](Self::tick) until the duration elapses;
    /// there is no way to cancel or await it. The returned id is a
    /// diagnostic handle only.
    pub fn spawn(
        &mut self,
        projector: &dyn ScreenProjector,
        world_position: Vec3,
        text: impl Into<String>,
        style: StyleSelector,
    ) -> LabelId {
        let style = self.resolve_style(style);
        let anchor = world_position + self.next_stagger_offset();

        let id = self.pool.acquire();
        let label = self.pool.get_mut(id);
        label.text = text.into();
        label.color = style.color;
        label.font_size = style.font_size;
        label.scale = Vec3::ONE;
        if let Some(screen) = projector.project(anchor) {
            label.screen_position = screen;
        }
        label.visible = true;

        self.active.push(ActiveText {
            label: id,
            world_position: anchor,
            elapsed: 0.0,
            phase: Phase::Commit,
        });
        id
    }

    /// Advance every in-flight animation by one frame.
    ///
    /// Each instance does O(1) work: one re-projection of its world anchor
    /// and at most one curve sample applied uniformly to all three scale
    /// axes. Finished instances hide their label and return it to the pool
    /// exactly once.
    pub fn tick(&mut self, dt: f32, projector: &dyn ScreenProjector) {
        let mut i = 0;
        while i < self.active.len() {
            let inst = &mut self.active[i];

            // The anchor is not fixed at spawn time: follow it every frame.
            if let Some(screen) = projector.project(inst.world_position) {
                self.pool.get_mut(inst.label).screen_position = screen;
            }

            let finished = match inst.phase {
                Phase::Commit => {
                    inst.phase = Phase::Animate;
                    false
                }
                Phase::Animate => {
                    if self.duration <= 0.0 {
                        inst.phase = Phase::Linger;
                    } else {
                        let fraction = (inst.elapsed / self.duration).clamp(0.0, 1.0);
                        let scale = self.curve.evaluate(fraction);
                        self.pool.get_mut(inst.label).scale = Vec3::splat(scale);
                        if fraction >= 1.0 {
                            inst.phase = Phase::Linger;
                        } else {
                            inst.elapsed += dt;
                        }
                    }
                    false
                }
                Phase::Linger => true,
            };

            if finished {
                let id = self.active[i].label;
                self.pool.release(id);
                self.active.swap_remove(i);
            } else {
                i += 1;
            }
        }
    }

    fn resolve_style(&self, selector: StyleSelector) -> ResolvedStyle {
        match selector {
            StyleSelector::Preset(name) => {
                let preset = self.presets.resolve(name.as_deref());
                ResolvedStyle {
                    color: preset.color,
                    font_size: preset.font_size as f32,
                }
            }
            StyleSelector::Rarity { tier, font_scale } => ResolvedStyle {
                color: tier.color(),
                font_size: DEFAULT_FONT_SIZE as f32 * font_scale,
            },
        }
    }

    /// Next offset in the alternating stagger pattern, so simultaneous
    /// numbers do not stack on the same point.
    fn next_stagger_offset(&mut self) -> Vec3 {
        let (x, y) = match self.next_stagger {
            0 => (0.0, 0.0),
            1 => (
                STAGGER_HORIZONTAL_SPREAD * 0.4,
                STAGGER_VERTICAL_SPREAD * 0.3,
            ),
            _ => (
                STAGGER_HORIZONTAL_SPREAD * -0.4,
                STAGGER_VERTICAL_SPREAD * 0.6,
            ),
        };
        self.next_stagger = (self.next_stagger + 1) % 3;
        Vec3::new(x, y, 0.0)
    }

    /// Number of animations currently in flight.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// The label pool, for rendering and diagnostics.
    pub fn pool(&self) -> &LabelPool {
        &self.pool
    }

    /// The preset registry backing `StyleSelector::Preset`.
    pub fn presets(&self) -> &StylePresetRegistry {
        &self.presets
    }

    /// Configured animation duration in seconds.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Labels currently visible, for the overlay renderer.
    pub fn visible_labels(&self) -> impl Iterator<Item = &TextLabel> {
        self.pool.iter_visible()
    }
}
