mod history;

use egui::Color32;

use crate::config::SketchConfig;
use crate::error::SketchResult;
use crate::renderer::Renderer;
use crate::state::SketchState;

pub use history::History;

/// Result type for command execution
pub type CommandResult = SketchResult<()>;

/// Commands issued by the toolbar. Each maps onto one sketchpad operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Switch to the line tool with the given thickness
    SelectLine { thickness: f32 },
    /// Switch to a sticker tool for `glyph`
    SelectSticker { glyph: String },
    /// Validate user-entered text, add it to the palette and select it
    AddSticker { glyph: String },
    SetColor(Color32),
    Undo,
    Redo,
    /// Empty both the committed drawables and the redo buffer
    Clear,
    /// Write the committed drawables to the configured PNG file
    Export,
}

/// Everything a command may touch
pub struct CommandContext<'a> {
    pub state: &'a mut SketchState,
    pub renderer: &'a Renderer,
    pub config: &'a SketchConfig,
}

impl<'a> CommandContext<'a> {
    pub fn new(state: &'a mut SketchState, renderer: &'a Renderer, config: &'a SketchConfig) -> Self {
        Self {
            state,
            renderer,
            config,
        }
    }
}

impl Command {
    /// Execute the command with the given context
    pub fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        match self {
            Command::SelectLine { thickness } => ctx.state.select_line(*thickness),
            Command::SelectSticker { glyph } => ctx.state.select_sticker(glyph),
            Command::AddSticker { glyph } => ctx.state.add_custom_sticker(glyph),
            Command::SetColor(color) => {
                ctx.state.set_color(*color);
                Ok(())
            }
            Command::Undo => {
                ctx.state.undo();
                Ok(())
            }
            Command::Redo => {
                ctx.state.redo();
                Ok(())
            }
            Command::Clear => {
                ctx.state.clear();
                Ok(())
            }
            Command::Export => {
                ctx.renderer.export_to_file(ctx.state, ctx.config)?;
                Ok(())
            }
        }
    }
}
