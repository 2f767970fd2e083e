use egui::color_picker::{Alpha, color_edit_button_srgba};

use crate::app::SketchApp;
use crate::command::Command;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Sketchpad");
            ui.separator();

            let line = app.state.tool().as_line_tool().map(|tool| tool.thickness());
            ui.horizontal(|ui| {
                for (label, thickness) in [
                    ("Thin", app.config.thin_thickness),
                    ("Thick", app.config.thick_thickness),
                ] {
                    if ui.selectable_label(line == Some(thickness), label).clicked() {
                        app.execute(Command::SelectLine { thickness });
                    }
                }
            });

            ui.horizontal(|ui| {
                ui.label("Color:");
                let mut color = app.state.settings().color;
                if color_edit_button_srgba(ui, &mut color, Alpha::Opaque).changed() {
                    app.execute(Command::SetColor(color));
                }
            });
            ui.separator();

            ui.label("Stickers");
            let selected = app
                .state
                .tool()
                .as_sticker_tool()
                .map(|tool| tool.glyph().to_owned());
            let palette = app.state.palette().to_vec();
            ui.horizontal_wrapped(|ui| {
                for glyph in palette {
                    let is_selected = selected.as_deref() == Some(glyph.as_str());
                    if ui.selectable_label(is_selected, glyph.as_str()).clicked() {
                        app.execute(Command::SelectSticker { glyph });
                    }
                }
            });
            ui.horizontal(|ui| {
                ui.add(egui::TextEdit::singleline(&mut app.custom_sticker).desired_width(80.0));
                if ui.button("Add").clicked() {
                    let glyph = std::mem::take(&mut app.custom_sticker);
                    app.execute(Command::AddSticker { glyph });
                }
            });
            ui.separator();

            ui.horizontal(|ui| {
                let history = app.state.history();
                let (can_undo, can_redo) = (history.can_undo(), history.can_redo());
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.execute(Command::Undo);
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.execute(Command::Redo);
                }
            });
            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    app.execute(Command::Clear);
                }
                if ui.button("Export").clicked() {
                    app.execute(Command::Export);
                }
            });

            if let Some(status) = &app.status {
                ui.separator();
                ui.label(status);
            }
        });
}
