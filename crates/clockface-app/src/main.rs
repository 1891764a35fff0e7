//! Clockface desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop application.

use eframe::{
    NativeOptions,
    egui::{self, Vec2},
};

use crate::app::ClockfaceApp;

mod app;
mod ui;
mod version;

fn main() -> eframe::Result<()> {
    better_panic::install();
    env_logger::init();

    log::info!("Starting Clockface, version={}", version::build_version());

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_resizable(true)
            .with_inner_size(Vec2::new(480.0, 480.0))
            .with_min_inner_size(Vec2::new(240.0, 240.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Clockface",
        options,
        Box::new(|cc| Ok(Box::new(ClockfaceApp::new(cc)))),
    )
}
