#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe_sketch::{PaintApp, PaintConfig};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PaintConfig::from_env();
    // Room for the toolbar and panel margins around the canvas
    let window_size = [
        config.canvas_width as f32 + 20.0,
        config.canvas_height as f32 + 80.0,
    ];

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sketch (PNG export)")
            .with_inner_size(window_size),
        ..Default::default()
    };

    eframe::run_native(
        "eframe_sketch",
        native_options,
        Box::new(move |cc| Ok(Box::new(PaintApp::new(cc, &config)?))),
    )
}
