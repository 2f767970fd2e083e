use egui::{Context, PointerButton, Pos2, Rect};

/// Pointer events delivered to the sketchpad, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed over the canvas
    PointerDown(Pos2),
    /// Pointer moved, with or without the button held
    PointerMove(Pos2),
    /// Primary button was released after a press on the canvas
    PointerUp(Pos2),
    /// Pointer entered the canvas
    PointerEnter(Pos2),
    /// Pointer left the canvas
    PointerLeave,
}

/// Pointer state sampled from one egui frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    /// Screen position, if the pointer is over the window
    pub hover_pos: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
}

impl PointerSnapshot {
    pub fn from_egui(ctx: &Context) -> Self {
        ctx.input(|input| Self {
            hover_pos: input.pointer.hover_pos(),
            pressed: input.pointer.button_pressed(PointerButton::Primary),
            released: input.pointer.button_released(PointerButton::Primary),
        })
    }
}

/// Converts raw egui pointer input into canvas `InputEvent`s.
///
/// Only events over the canvas are forwarded, with one exception: once a
/// press started on the canvas, the matching release is delivered wherever
/// it happens so the gesture always ends.
#[derive(Debug, Clone)]
pub struct CanvasInput {
    canvas_rect: Rect,
    last_pointer_pos: Option<Pos2>,
    inside: bool,
    dragging: bool,
}

impl CanvasInput {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_pointer_pos: None,
            inside: false,
            dragging: false,
        }
    }

    /// Update the canvas rectangle (e.g. if the window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn to_canvas(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Process egui's current input
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        self.process(PointerSnapshot::from_egui(ctx))
    }

    /// Translate one frame of pointer state into events, in the order
    /// enter/leave, move, down, up
    pub fn process(&mut self, snapshot: PointerSnapshot) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let hover = snapshot.hover_pos;
        let inside = hover.is_some_and(|pos| self.canvas_rect.contains(pos));

        match (self.inside, inside, hover) {
            (false, true, Some(pos)) => events.push(InputEvent::PointerEnter(self.to_canvas(pos))),
            (true, false, _) => events.push(InputEvent::PointerLeave),
            _ => {}
        }
        self.inside = inside;

        if let Some(pos) = hover {
            if inside && Some(pos) != self.last_pointer_pos {
                events.push(InputEvent::PointerMove(self.to_canvas(pos)));
            }
        }

        if snapshot.pressed && inside {
            if let Some(pos) = hover {
                events.push(InputEvent::PointerDown(self.to_canvas(pos)));
                self.dragging = true;
            }
        }

        if snapshot.released && self.dragging {
            if let Some(pos) = hover.or(self.last_pointer_pos) {
                events.push(InputEvent::PointerUp(self.to_canvas(pos)));
            }
            self.dragging = false;
        }

        if hover.is_some() {
            self.last_pointer_pos = hover;
        }
        events
    }
}
