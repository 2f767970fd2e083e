#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use sketchpad::{SketchApp, SketchConfig};

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SketchConfig::from_env().unwrap_or_else(|err| {
        log::error!("Falling back to default configuration: {err}");
        SketchConfig::default()
    });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.canvas_size + 240.0, config.canvas_size + 60.0])
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Sketchpad",
        native_options,
        Box::new(|cc| Ok(Box::new(SketchApp::new(cc, config)))),
    )
}
