use egui::{Color32, Pos2};

use crate::drawable::DrawableType;
use crate::surface::Surface;

mod line_tool;
mod sticker_tool;

pub use line_tool::LineTool;
pub use sticker_tool::StickerTool;

/// Tool trait defines the interface for the active drawing mode.
///
/// A tool previews itself at the pointer and creates new drawables stamped
/// with its current settings.
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Last known pointer position, in canvas coordinates
    fn position(&self) -> Pos2;

    fn is_visible(&self) -> bool;

    /// Track the pointer. Always succeeds.
    fn move_to(&mut self, pos: Pos2);

    /// Show or hide the preview. Takes effect on the next redraw.
    fn set_visible(&mut self, visible: bool);

    /// Create a drawable at `pos` from a snapshot of the tool's settings.
    /// The tool itself is left untouched.
    fn create_drawable(&self, pos: Pos2) -> DrawableType;

    /// Paint the preview at the pointer; a no-op while hidden
    fn render_preview(&self, surface: &mut dyn Surface);
}

/// Enumeration of all available tool types
#[derive(Debug, Clone, PartialEq)]
pub enum ToolType {
    Line(LineTool),
    Sticker(StickerTool),
}

impl ToolType {
    pub fn color(&self) -> Color32 {
        match self {
            Self::Line(tool) => tool.color(),
            Self::Sticker(tool) => tool.color(),
        }
    }

    pub fn as_line_tool(&self) -> Option<&LineTool> {
        match self {
            Self::Line(tool) => Some(tool),
            Self::Sticker(_) => None,
        }
    }

    pub fn as_sticker_tool(&self) -> Option<&StickerTool> {
        match self {
            Self::Sticker(tool) => Some(tool),
            Self::Line(_) => None,
        }
    }

    /// Pointer position and preview visibility belong to the cursor, not to
    /// the tool settings, so they follow the pointer across a tool switch.
    pub fn with_cursor_of(mut self, previous: &ToolType) -> Self {
        self.move_to(previous.position());
        self.set_visible(previous.is_visible());
        self
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Line(tool) => tool.name(),
            Self::Sticker(tool) => tool.name(),
        }
    }

    fn position(&self) -> Pos2 {
        match self {
            Self::Line(tool) => tool.position(),
            Self::Sticker(tool) => tool.position(),
        }
    }

    fn is_visible(&self) -> bool {
        match self {
            Self::Line(tool) => tool.is_visible(),
            Self::Sticker(tool) => tool.is_visible(),
        }
    }

    fn move_to(&mut self, pos: Pos2) {
        match self {
            Self::Line(tool) => tool.move_to(pos),
            Self::Sticker(tool) => tool.move_to(pos),
        }
    }

    fn set_visible(&mut self, visible: bool) {
        match self {
            Self::Line(tool) => tool.set_visible(visible),
            Self::Sticker(tool) => tool.set_visible(visible),
        }
    }

    fn create_drawable(&self, pos: Pos2) -> DrawableType {
        match self {
            Self::Line(tool) => tool.create_drawable(pos),
            Self::Sticker(tool) => tool.create_drawable(pos),
        }
    }

    fn render_preview(&self, surface: &mut dyn Surface) {
        match self {
            Self::Line(tool) => tool.render_preview(surface),
            Self::Sticker(tool) => tool.render_preview(surface),
        }
    }
}

impl From<LineTool> for ToolType {
    fn from(tool: LineTool) -> Self {
        Self::Line(tool)
    }
}

impl From<StickerTool> for ToolType {
    fn from(tool: StickerTool) -> Self {
        Self::Sticker(tool)
    }
}
