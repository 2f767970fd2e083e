use egui::{Color32, Pos2};
use uuid::Uuid;

use crate::surface::Surface;

mod sticker;
mod stroke;

pub use sticker::Sticker;
pub use stroke::Stroke;

/// Stable identity of a drawable, assigned when a tool creates it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawableId(Uuid);

impl DrawableId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DrawableId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DrawableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Common trait for every committed mark on the canvas.
///
/// A drawable captures its style when it is created. `render` only reads
/// the drawable's own fields, never the active tool settings.
pub trait Drawable {
    fn id(&self) -> DrawableId;

    /// Short name of the variant, used in logs
    fn kind(&self) -> &'static str;

    fn color(&self) -> Color32;

    /// Feed a drag sample into the drawable while its gesture is active
    fn extend(&mut self, pos: Pos2);

    /// Paint onto `surface`, setting the surface style first
    fn render(&self, surface: &mut dyn Surface);
}

/// Enumeration of all drawable variants
#[derive(Debug, Clone, PartialEq)]
pub enum DrawableType {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl DrawableType {
    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Self::Stroke(stroke) => Some(stroke),
            Self::Sticker(_) => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Self::Sticker(sticker) => Some(sticker),
            Self::Stroke(_) => None,
        }
    }
}

impl Drawable for DrawableType {
    fn id(&self) -> DrawableId {
        match self {
            Self::Stroke(stroke) => stroke.id(),
            Self::Sticker(sticker) => sticker.id(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Stroke(stroke) => stroke.kind(),
            Self::Sticker(sticker) => sticker.kind(),
        }
    }

    fn color(&self) -> Color32 {
        match self {
            Self::Stroke(stroke) => stroke.color(),
            Self::Sticker(sticker) => sticker.color(),
        }
    }

    fn extend(&mut self, pos: Pos2) {
        match self {
            Self::Stroke(stroke) => stroke.extend(pos),
            Self::Sticker(sticker) => sticker.extend(pos),
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        match self {
            Self::Stroke(stroke) => stroke.render(surface),
            Self::Sticker(sticker) => sticker.render(surface),
        }
    }
}

impl From<Stroke> for DrawableType {
    fn from(stroke: Stroke) -> Self {
        Self::Stroke(stroke)
    }
}

impl From<Sticker> for DrawableType {
    fn from(sticker: Sticker) -> Self {
        Self::Sticker(sticker)
    }
}
