use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{SketchError, SketchResult};

/// Environment variable naming an optional JSON configuration file
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

/// Sketchpad settings. Every field has a default, so a config file only
/// needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to their default values
pub struct SketchConfig {
    /// Side length of the square on-screen canvas, in logical pixels
    pub canvas_size: f32,
    /// Side length of the exported PNG, in pixels
    pub export_size: u32,
    pub export_file_name: String,
    /// Canvas background as unmultiplied RGBA
    pub background: [u8; 4],
    pub thin_thickness: f32,
    pub thick_thickness: f32,
    pub initial_color: [u8; 4],
    /// Font size of stickers and of the sticker preview
    pub sticker_size: f32,
    pub stickers: Vec<String>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_size: 256.0,
            export_size: 1024,
            export_file_name: "sketchpad.png".to_owned(),
            background: [255, 255, 255, 255],
            thin_thickness: 2.0,
            thick_thickness: 6.0,
            initial_color: [0, 0, 0, 255],
            sticker_size: 32.0,
            stickers: vec!["🤠".to_owned(), "🎃".to_owned(), "🌮".to_owned()],
        }
    }
}

impl SketchConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> SketchResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> SketchResult<Self> {
        let path = path.as_ref();
        log::info!("Loading configuration from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load the file named by `SKETCHPAD_CONFIG`, or the defaults when unset
    pub fn from_env() -> SketchResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> SketchResult<()> {
        if !(self.canvas_size.is_finite() && self.canvas_size > 0.0) {
            return Err(SketchError::InvalidConfig(format!(
                "canvas_size must be positive, got {}",
                self.canvas_size
            )));
        }
        if (self.export_size as f32) < self.canvas_size {
            return Err(SketchError::InvalidConfig(format!(
                "export_size {} is smaller than canvas_size {}",
                self.export_size, self.canvas_size
            )));
        }
        if self.export_file_name.trim().is_empty() {
            return Err(SketchError::InvalidConfig(
                "export_file_name must not be empty".to_owned(),
            ));
        }
        for thickness in [self.thin_thickness, self.thick_thickness] {
            if !(thickness.is_finite() && thickness > 0.0) {
                return Err(SketchError::InvalidThickness(thickness));
            }
        }
        if !(self.sticker_size.is_finite() && self.sticker_size > 0.0) {
            return Err(SketchError::InvalidConfig(format!(
                "sticker_size must be positive, got {}",
                self.sticker_size
            )));
        }
        if self.stickers.iter().any(|glyph| glyph.trim().is_empty()) {
            return Err(SketchError::EmptyGlyph);
        }
        Ok(())
    }

    /// Factor between export pixels and canvas units
    pub fn export_scale(&self) -> f32 {
        self.export_size as f32 / self.canvas_size
    }

    pub fn background_color(&self) -> Color32 {
        let [r, g, b, a] = self.background;
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }

    pub fn initial_color(&self) -> Color32 {
        let [r, g, b, a] = self.initial_color;
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}
