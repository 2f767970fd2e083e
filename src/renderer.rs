use std::path::PathBuf;

use egui::{Color32, Pos2, Rect};

use crate::command::History;
use crate::config::SketchConfig;
use crate::drawable::Drawable;
use crate::error::SketchResult;
use crate::state::SketchState;
use crate::surface::{RasterSurface, Surface, load_sticker_fonts};
use crate::tools::Tool;

/// Render pipeline: paints the sketchpad state onto a surface.
///
/// Draw order is always background, committed drawables in commit order,
/// then the tool preview.
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::from_config(&SketchConfig::default())
    }
}

impl Renderer {
    pub fn new(background: Color32) -> Self {
        Self { background }
    }

    pub fn from_config(config: &SketchConfig) -> Self {
        Self::new(config.background_color())
    }

    /// Full redraw of the on-screen canvas
    pub fn redraw(&self, surface: &mut dyn Surface, state: &SketchState) {
        log::trace!("Redrawing {} drawables", state.history().len());
        self.render_drawables(surface, state.history());
        state.tool().render_preview(surface);
    }

    /// Background plus every committed drawable, without any preview
    pub fn render_drawables(&self, surface: &mut dyn Surface, history: &History) {
        self.clear_canvas(surface);
        for drawable in history.committed() {
            drawable.render(surface);
        }
    }

    /// Scale the surface by `scale`, then render the committed drawables
    pub fn render_export(&self, surface: &mut dyn Surface, history: &History, scale: f32) {
        surface.scale(scale);
        self.render_drawables(surface, history);
    }

    /// Render the committed drawables at export size and encode them as PNG.
    /// The on-screen state is not touched.
    pub fn export(&self, state: &SketchState, config: &SketchConfig) -> SketchResult<Vec<u8>> {
        let fonts = load_sticker_fonts()?;
        let mut surface =
            RasterSurface::new(config.export_size, config.export_size)?.with_fonts(fonts);
        self.render_export(&mut surface, state.history(), config.export_scale());
        surface.encode_png()
    }

    /// Export to `config.export_file_name`, returning the written path
    pub fn export_to_file(&self, state: &SketchState, config: &SketchConfig) -> SketchResult<PathBuf> {
        let bytes = self.export(state, config).inspect_err(|err| {
            log::error!("Export failed: {err}");
        })?;
        let path = PathBuf::from(&config.export_file_name);
        std::fs::write(&path, &bytes).inspect_err(|err| {
            log::error!("Failed to write {}: {err}", path.display());
        })?;
        log::info!(
            "Exported {} drawables to {} ({} bytes)",
            state.history().len(),
            path.display(),
            bytes.len()
        );
        Ok(path)
    }

    /// Cover the whole surface with the opaque background
    fn clear_canvas(&self, surface: &mut dyn Surface) {
        surface.set_fill_style(self.background);
        let size = surface.size();
        surface.fill_rect(Rect::from_min_size(Pos2::ZERO, size));
    }
}
