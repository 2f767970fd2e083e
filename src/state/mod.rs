mod editor_state;
mod redraw;
mod settings;

use egui::{Color32, Pos2};

use crate::command::History;
use crate::config::SketchConfig;
use crate::drawable::Drawable;
use crate::error::SketchResult;
use crate::input::InputEvent;
use crate::tools::{Tool, ToolType};

pub use editor_state::GestureState;
pub use redraw::{RedrawReason, RedrawTracker};
pub use settings::{ToolSettings, validate_glyph, validate_thickness};

/// Whole drawing state: history, active tool, shared tool settings and the
/// gesture in progress. Owned by the UI layer and mutated only through the
/// methods below, each of which requests a redraw when it changes something.
#[derive(Debug, Clone)]
pub struct SketchState {
    history: History,
    tool: ToolType,
    settings: ToolSettings,
    gesture: GestureState,
    palette: Vec<String>,
    pointer_inside: bool,
    redraw: RedrawTracker,
}

impl Default for SketchState {
    fn default() -> Self {
        Self::new(&SketchConfig::default())
    }
}

impl SketchState {
    pub fn new(config: &SketchConfig) -> Self {
        let settings = ToolSettings::from_config(config);
        Self {
            history: History::new(),
            tool: settings.line_tool().into(),
            settings,
            gesture: GestureState::Idle,
            palette: config.stickers.clone(),
            pointer_inside: false,
            redraw: RedrawTracker::default(),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tool(&self) -> &ToolType {
        &self.tool
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    /// Stickers offered by the toolbar, in insertion order
    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    pub fn redraw_tracker(&self) -> &RedrawTracker {
        &self.redraw
    }

    /// Consume a pending redraw request
    pub fn take_redraw(&mut self) -> bool {
        self.redraw.take()
    }

    /// Route a canvas pointer event to its handler
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown(pos) => self.pointer_down(pos),
            InputEvent::PointerMove(pos) => self.pointer_move(pos),
            InputEvent::PointerUp(pos) => self.pointer_up(pos),
            InputEvent::PointerEnter(pos) => self.pointer_enter(pos),
            InputEvent::PointerLeave => self.pointer_leave(),
        }
    }

    /// Idle -> Committing: create a drawable with the active tool, commit
    /// it and hide the preview
    pub fn pointer_down(&mut self, pos: Pos2) {
        if self.gesture.is_committing() {
            log::debug!("Pointer down during a gesture, finishing the previous one");
            self.finish_gesture();
        }
        self.pointer_inside = true;

        let drawable = self.tool.create_drawable(pos);
        let id = drawable.id();
        self.history.commit(drawable);
        self.tool.move_to(pos);
        self.tool.set_visible(false);
        self.gesture = GestureState::Committing { drawable: id };
        log::debug!("Gesture started with {} at {:?}", self.tool.name(), pos);
        self.redraw.request(RedrawReason::Commit);
    }

    /// Extend the committed drawable while Committing, otherwise move the
    /// preview
    pub fn pointer_move(&mut self, pos: Pos2) {
        self.tool.move_to(pos);
        match self.gesture {
            GestureState::Committing { drawable } => {
                match self.history.active_mut(drawable) {
                    Some(active) => {
                        active.extend(pos);
                        log::trace!("Extended {} {} to {:?}", active.kind(), drawable, pos);
                        self.redraw.request(RedrawReason::Extend);
                    }
                    None => {
                        log::debug!("Drawable {drawable} is no longer active, ending gesture");
                        self.finish_gesture();
                    }
                }
            }
            GestureState::Idle => {
                self.pointer_inside = true;
                self.tool.set_visible(true);
                self.redraw.request(RedrawReason::ToolMoved);
            }
        }
    }

    /// Committing -> Idle: the drawable is final, show the preview again
    pub fn pointer_up(&mut self, pos: Pos2) {
        if self.gesture.is_idle() {
            return;
        }
        self.tool.move_to(pos);
        self.finish_gesture();
    }

    pub fn pointer_enter(&mut self, pos: Pos2) {
        self.pointer_inside = true;
        self.tool.move_to(pos);
        if self.gesture.is_idle() {
            self.tool.set_visible(true);
        }
        self.redraw.request(RedrawReason::ToolVisibility);
    }

    /// Hide the preview. A gesture in progress keeps going until pointer-up.
    pub fn pointer_leave(&mut self) {
        self.pointer_inside = false;
        self.tool.set_visible(false);
        self.redraw.request(RedrawReason::ToolVisibility);
    }

    /// Select the line tool, making `thickness` the shared line thickness
    pub fn select_line(&mut self, thickness: f32) -> SketchResult<()> {
        let thickness = validate_thickness(thickness).inspect_err(|err| {
            log::warn!("Rejected line selection: {err}");
        })?;
        self.settings.thickness = thickness;
        self.replace_tool(self.settings.line_tool().into());
        Ok(())
    }

    /// Select a fresh sticker tool for `glyph` with the shared colour
    pub fn select_sticker(&mut self, glyph: &str) -> SketchResult<()> {
        let glyph = validate_glyph(glyph).inspect_err(|err| {
            log::warn!("Rejected sticker selection: {err}");
        })?;
        self.replace_tool(self.settings.sticker_tool(glyph).into());
        Ok(())
    }

    /// Add user-entered text to the palette (once) and select it
    pub fn add_custom_sticker(&mut self, input: &str) -> SketchResult<()> {
        let glyph = validate_glyph(input).inspect_err(|err| {
            log::warn!("Rejected custom sticker {input:?}: {err}");
        })?;
        if !self.palette.iter().any(|existing| existing == glyph) {
            log::info!("Added sticker {glyph} to the palette");
            self.palette.push(glyph.to_owned());
        }
        self.select_sticker(glyph)
    }

    /// Change the shared colour. The active tool is rebuilt with it; already
    /// committed drawables keep their own colour.
    pub fn set_color(&mut self, color: Color32) {
        self.settings.color = color;
        let tool: ToolType = match &self.tool {
            ToolType::Line(_) => self.settings.line_tool().into(),
            ToolType::Sticker(tool) => self.settings.sticker_tool(tool.glyph()).into(),
        };
        self.replace_tool(tool);
    }

    /// Silent no-op when nothing is committed
    pub fn undo(&mut self) {
        self.finish_gesture();
        if self.history.undo().is_some() {
            self.redraw.request(RedrawReason::Undo);
        }
    }

    /// Silent no-op when nothing was undone
    pub fn redo(&mut self) {
        self.finish_gesture();
        if self.history.redo().is_some() {
            self.redraw.request(RedrawReason::Redo);
        }
    }

    pub fn clear(&mut self) {
        self.finish_gesture();
        log::info!("Clearing canvas");
        self.history.clear();
        self.redraw.request(RedrawReason::Clear);
    }

    fn replace_tool(&mut self, tool: ToolType) {
        let tool = tool.with_cursor_of(&self.tool);
        log::info!("Selected {} tool", tool.name());
        self.tool = tool;
        self.redraw.request(RedrawReason::ToolChanged);
    }

    fn finish_gesture(&mut self) {
        if let GestureState::Committing { drawable } = self.gesture {
            log::debug!("Gesture finished for {drawable}");
            self.gesture = GestureState::Idle;
            self.tool.set_visible(self.pointer_inside);
            self.redraw.request(RedrawReason::ToolVisibility);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_pointer_down_hides_preview() {
        let mut state = SketchState::default();
        state.pointer_move(pos2(5.0, 5.0));
        assert!(state.tool().is_visible());
        state.pointer_down(pos2(5.0, 5.0));
        assert!(!state.tool().is_visible());
        assert!(state.gesture().is_committing());
        state.pointer_up(pos2(5.0, 5.0));
        assert!(state.tool().is_visible());
        assert!(state.gesture().is_idle());
    }

    #[test]
    fn test_idle_move_does_not_touch_history() {
        let mut state = SketchState::default();
        state.pointer_move(pos2(1.0, 2.0));
        state.pointer_move(pos2(3.0, 4.0));
        assert!(state.history().is_empty());
        assert_eq!(state.tool().position(), pos2(3.0, 4.0));
    }

    #[test]
    fn test_pointer_up_when_idle_is_ignored() {
        let mut state = SketchState::default();
        state.take_redraw();
        state.pointer_up(pos2(1.0, 1.0));
        assert!(!state.take_redraw());
    }

    #[test]
    fn test_undo_during_gesture_ends_it() {
        let mut state = SketchState::default();
        state.pointer_down(pos2(1.0, 1.0));
        state.undo();
        assert!(state.gesture().is_idle());
        state.pointer_move(pos2(2.0, 2.0));
        assert_eq!(state.history().redo_stack()[0].as_stroke().unwrap().points().len(), 1);
    }
}
