use egui::{Color32, Pos2};

use super::Tool;
use crate::drawable::{DrawableType, Sticker};
use crate::surface::{Font, Surface};

/// Places copies of one glyph
#[derive(Debug, Clone, PartialEq)]
pub struct StickerTool {
    glyph: String,
    size: f32,
    color: Color32,
    position: Pos2,
    visible: bool,
}

impl StickerTool {
    /// `glyph` must be non-empty; callers validate user input first.
    pub fn new(glyph: impl Into<String>, size: f32, color: Color32) -> Self {
        Self {
            glyph: glyph.into(),
            size,
            color,
            position: Pos2::ZERO,
            visible: false,
        }
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn color(&self) -> Color32 {
        self.color
    }
}

impl Tool for StickerTool {
    fn name(&self) -> &'static str {
        "Sticker"
    }

    fn position(&self) -> Pos2 {
        self.position
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn move_to(&mut self, pos: Pos2) {
        self.position = pos;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn create_drawable(&self, pos: Pos2) -> DrawableType {
        Sticker::new(pos, self.glyph.clone(), self.size, self.color).into()
    }

    fn render_preview(&self, surface: &mut dyn Surface) {
        if !self.visible {
            return;
        }
        surface.set_fill_style(self.color);
        surface.set_font(Font::new(self.size));
        surface.fill_text(&self.glyph, self.position);
    }
}
