mod app;
mod chart;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::HousingBurdenApp;
use config::ChartConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let mut config = ChartConfig::discover();
    // Optional positional argument overrides the configured data file.
    if let Some(path) = std::env::args_os().nth(1) {
        config.data_path = PathBuf::from(path);
    }

    let canvas = [config.width as f32, config.height as f32];
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([canvas[0] + 260.0, canvas[1] + 60.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Housing Burden – 2015 vs 2022",
        options,
        Box::new(|_cc| Ok(Box::new(HousingBurdenApp::new(config)))),
    )
}
