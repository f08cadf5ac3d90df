mod app;
mod data;
mod picture;
mod state;
mod ui;

use app::CoachViewerApp;
use eframe::egui;

/// Fixed relative path to the backing file.
const DATA_FILE: &str = "coaches_data.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 620.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Coach Profile Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(CoachViewerApp::new(DATA_FILE.into())))),
    )
}
