#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod drawable;
pub mod error;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod tools;

pub use app::SketchApp;
pub use command::{Command, CommandContext, History};
pub use config::SketchConfig;
pub use drawable::{Drawable, DrawableId, DrawableType, Sticker, Stroke};
pub use error::{SketchError, SketchResult};
pub use input::{CanvasInput, InputEvent};
pub use renderer::Renderer;
pub use state::{GestureState, SketchState};
pub use surface::Surface;
pub use tools::{LineTool, StickerTool, Tool, ToolType};
