use egui::{Color32, Pos2};

use super::{Drawable, DrawableId};
use crate::surface::{Font, Surface};

/// A glyph placed on the canvas. Dragging moves it rather than adding
/// points.
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    id: DrawableId,
    position: Pos2,
    glyph: String,
    size: f32,
    color: Color32,
}

impl Sticker {
    pub fn new(position: Pos2, glyph: impl Into<String>, size: f32, color: Color32) -> Self {
        Self {
            id: DrawableId::new(),
            position,
            glyph: glyph.into(),
            size,
            color,
        }
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Font size in canvas units
    pub fn size(&self) -> f32 {
        self.size
    }
}

impl Drawable for Sticker {
    fn id(&self) -> DrawableId {
        self.id
    }

    fn kind(&self) -> &'static str {
        "sticker"
    }

    fn color(&self) -> Color32 {
        self.color
    }

    fn extend(&mut self, pos: Pos2) {
        self.position = pos;
    }

    fn render(&self, surface: &mut dyn Surface) {
        surface.set_fill_style(self.color);
        surface.set_font(Font::new(self.size));
        surface.fill_text(&self.glyph, self.position);
    }
}
