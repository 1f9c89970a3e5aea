//! Pooled text labels
//!
//! Reusable renderable label handles. The pool owns every label; a spawn
//! operation borrows one by `LabelId` for the length of its animation and
//! returns it exactly once. Released labels are hidden, not destroyed, and
//! recycled before any new label is created, so the pool never grows past
//! the high-water mark of simultaneously active spawns.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Font style applied to every pooled label at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

/// Static visual defaults applied by the label factory.
///
/// These correspond to the designer-set font fields: outline width and
/// font style. Alignment is always centered on the projected point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelDefaults {
    /// Outline width as a fraction of the font size
    pub outline_width: f32,
    pub font_style: FontStyle,
}

impl Default for LabelDefaults {
    fn default() -> Self {
        Self {
            outline_width: 0.15,
            font_style: FontStyle::Normal,
        }
    }
}

/// Handle to a pooled label. Only meaningful with the pool that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabelId(usize);

/// A renderable text label owned by the pool.
///
/// Mutable state is written by the active spawn that borrowed the label
/// and read by the overlay renderer.
#[derive(Debug, Clone)]
pub struct TextLabel {
    pub text: String,
    pub color: Color,
    /// Font size in points at scale 1.0
    pub font_size: f32,
    /// Projected screen position, updated every frame
    pub screen_position: Vec2,
    /// Uniform animation scale, set on all three axes
    pub scale: Vec3,
    pub visible: bool,
    /// Outline width as a fraction of the font size
    pub outline_width: f32,
    pub font_style: FontStyle,
}

impl TextLabel {
    fn new(defaults: &LabelDefaults) -> Self {
        Self {
            text: String::new(),
            color: Color::WHITE,
            font_size: 0.0,
            screen_position: Vec2::ZERO,
            scale: Vec3::ONE,
            visible: false,
            outline_width: defaults.outline_width,
            font_style: defaults.font_style,
        }
    }
}

/// Grow-on-demand pool of text labels.
#[derive(Debug, Default)]
pub struct LabelPool {
    labels: Vec<TextLabel>,
    free: Vec<usize>,
    defaults: LabelDefaults,
}

impl LabelPool {
    pub fn new(defaults: LabelDefaults) -> Self {
        Self {
            labels: Vec::new(),
            free: Vec::new(),
            defaults,
        }
    }

    /// Borrow a label, creating a new one only when none are free.
    pub fn acquire(&mut self) -> LabelId {
        match self.free.pop() {
            Some(index) => LabelId(index),
            None => {
                let index = self.labels.len();
                self.labels.push(TextLabel::new(&self.defaults));
                LabelId(index)
            }
        }
    }

    /// Hide a label and return it for reuse.
    ///
    /// Releasing a label that is already free is a caller bug; it is
    /// logged and ignored so a stray release cannot corrupt the free list.
    pub fn release(&mut self, id: LabelId) {
        if self.free.contains(&id.0) {
            warn!("label {:?} released twice, ignoring", id);
            return;
        }
        self.labels[id.0].visible = false;
        self.free.push(id.0);
    }

    pub fn get(&self, id: LabelId) -> &TextLabel {
        &self.labels[id.0]
    }

    pub fn get_mut(&mut self, id: LabelId) -> &mut TextLabel {
        &mut self.labels[id.0]
    }

    /// Total labels ever created: the pool's high-water mark.
    pub fn created(&self) -> usize {
        self.labels.len()
    }

    /// Labels currently available for reuse.
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Labels currently borrowed by active spawns.
    pub fn in_use(&self) -> usize {
        self.labels.len() - self.free.len()
    }

    /// Iterate labels that are currently visible, for rendering.
    pub fn iter_visible(&self) -> impl Iterator<Item = &TextLabel> {
        self.labels.iter().filter(|label| label.visible)
    }
}
