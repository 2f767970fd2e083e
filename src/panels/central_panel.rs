use egui::{CursorIcon, Sense, Vec2};

use crate::app::SketchApp;
use crate::surface::PainterSurface;

/// The fixed-size drawing canvas
pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let size = Vec2::splat(app.config.canvas_size);
        let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
        let canvas_rect = response.rect;
        app.input.set_canvas_rect(canvas_rect);

        for event in app.input.process_input(ctx) {
            app.state.handle_input(event);
        }

        // The tool preview stands in for the system cursor
        if response.hovered() {
            ctx.set_cursor_icon(CursorIcon::None);
        }

        let painter = painter.with_clip_rect(canvas_rect);
        let mut surface = PainterSurface::new(&painter, canvas_rect);
        app.renderer.redraw(&mut surface, &app.state);
    });
}
