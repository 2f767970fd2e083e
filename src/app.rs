use egui::{Key, KeyboardShortcut, Modifiers, Rect, Vec2};

use crate::command::{Command, CommandContext};
use crate::config::SketchConfig;
use crate::input::CanvasInput;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::state::SketchState;

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

/// Composition root: owns the sketchpad state and wires egui to it
pub struct SketchApp {
    pub(crate) config: SketchConfig,
    pub(crate) state: SketchState,
    pub(crate) renderer: Renderer,
    pub(crate) input: CanvasInput,
    /// Text field contents for a custom sticker
    pub(crate) custom_sticker: String,
    /// Last export or validation message shown in the toolbar
    pub(crate) status: Option<String>,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: SketchConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: SketchConfig) -> Self {
        let canvas_rect = Rect::from_min_size(egui::Pos2::ZERO, Vec2::splat(config.canvas_size));
        Self {
            state: SketchState::new(&config),
            renderer: Renderer::from_config(&config),
            input: CanvasInput::new(canvas_rect),
            custom_sticker: String::new(),
            status: None,
            config,
        }
    }

    pub fn state(&self) -> &SketchState {
        &self.state
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    /// Run a toolbar command, reporting failures in the status line
    pub fn execute(&mut self, command: Command) {
        let mut ctx = CommandContext::new(&mut self.state, &self.renderer, &self.config);
        match command.execute(&mut ctx) {
            Ok(()) => {
                if command == Command::Export {
                    self.status = Some(format!("Saved {}", self.config.export_file_name));
                } else if matches!(command, Command::AddSticker { .. }) {
                    self.status = None;
                }
            }
            Err(err) => {
                log::warn!("{command:?} failed: {err}");
                self.status = Some(err.to_string());
            }
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_shortcut(&UNDO_SHORTCUT)) {
            self.execute(Command::Undo);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&REDO_SHORTCUT)) {
            self.execute(Command::Redo);
        }
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        // Debug window showing history and redraw bookkeeping
        egui::Window::new("Sketch Debug")
            .default_open(false)
            .show(ctx, |ui| {
                let history = self.state.history();
                ui.label(format!("Committed: {}", history.len()));
                ui.label(format!("Redo stack: {}", history.redo_stack().len()));
                match self.state.gesture().active_drawable() {
                    Some(id) => ui.label(format!("Active drawable: {id}")),
                    None => ui.label("Active drawable: none"),
                };
                ui.label(format!(
                    "Redraw requests: {}",
                    self.state.redraw_tracker().requests()
                ));
            });

        tools_panel(self, ctx);
        central_panel(self, ctx);

        if self.state.take_redraw() {
            ctx.request_repaint();
        }
    }
}
