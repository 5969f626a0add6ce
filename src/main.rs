mod app;
mod color;
mod config;
mod context;
mod data;
mod error;
mod inference;
mod state;
mod ui;

#[cfg(test)]
mod fixtures;

use app::CytoPredictApp;
use clap::Parser;
use config::AppConfig;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = AppConfig::parse();
    log::info!("Data root: {}", config.root.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Breast Cancer Predictor",
        options,
        Box::new(move |_cc| Ok(Box::new(CytoPredictApp::new(&config)))),
    )
    .map_err(|e| anyhow::anyhow!("running the UI: {e}"))
}
