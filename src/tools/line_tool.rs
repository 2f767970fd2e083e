use egui::{Color32, Pos2};

use super::Tool;
use crate::drawable::{DrawableType, Stroke};
use crate::surface::Surface;

/// Width of the preview circle outline
const PREVIEW_LINE_WIDTH: f32 = 1.0;

/// Freehand line tool
#[derive(Debug, Clone, PartialEq)]
pub struct LineTool {
    thickness: f32,
    color: Color32,
    position: Pos2,
    visible: bool,
}

impl LineTool {
    pub fn new(thickness: f32, color: Color32) -> Self {
        Self {
            thickness,
            color,
            position: Pos2::ZERO,
            visible: false,
        }
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> Color32 {
        self.color
    }
}

impl Tool for LineTool {
    fn name(&self) -> &'static str {
        "Line"
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
        Stroke::new(pos, self.thickness, self.color).into()
    }

    fn render_preview(&self, surface: &mut dyn Surface) {
        if !self.visible {
            return;
        }
        surface.set_stroke_style(self.color);
        surface.set_line_width(PREVIEW_LINE_WIDTH);
        surface.begin_path();
        surface.circle(self.position, self.thickness * 0.5);
        surface.stroke();
    }
}
