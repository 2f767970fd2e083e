use egui::Color32;

use crate::config::SketchConfig;
use crate::error::{SketchError, SketchResult};
use crate::tools::{LineTool, StickerTool};

/// Settings shared by every tool instance. Selecting a tool builds a fresh
/// instance from these.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSettings {
    pub thickness: f32,
    pub color: Color32,
    pub sticker_size: f32,
}

impl ToolSettings {
    pub fn from_config(config: &SketchConfig) -> Self {
        Self {
            thickness: config.thin_thickness,
            color: config.initial_color(),
            sticker_size: config.sticker_size,
        }
    }

    pub fn line_tool(&self) -> LineTool {
        LineTool::new(self.thickness, self.color)
    }

    pub fn sticker_tool(&self, glyph: &str) -> StickerTool {
        StickerTool::new(glyph, self.sticker_size, self.color)
    }
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self::from_config(&SketchConfig::default())
    }
}

pub fn validate_thickness(thickness: f32) -> SketchResult<f32> {
    if thickness.is_finite() && thickness > 0.0 {
        Ok(thickness)
    } else {
        Err(SketchError::InvalidThickness(thickness))
    }
}

/// Trim user-entered sticker text; empty input is rejected
pub fn validate_glyph(input: &str) -> SketchResult<&str> {
    let glyph = input.trim();
    if glyph.is_empty() {
        Err(SketchError::EmptyGlyph)
    } else {
        Ok(glyph)
    }
}
