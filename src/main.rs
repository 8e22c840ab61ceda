mod app;
mod chart;
mod color;
mod config;
mod data;
mod error;
mod state;
mod ui;

use std::path::PathBuf;

use app::LifeScatterApp;
use config::ChartConfig;
use eframe::egui;
use state::AppState;

/// Loaded at startup when no path is given on the command line.
const DEFAULT_DATA_FILE: &str = "dataEveryYear.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let config = ChartConfig::from_env().unwrap_or_else(|e| {
        log::error!("{e:#}; using default configuration");
        ChartConfig::default()
    });

    let data_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

    let mut state = AppState::new(config);
    ui::panels::load_into(&mut state, &data_path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 580.0])
            .with_min_inner_size([560.0, 540.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Life Expectancy vs. Fertility",
        options,
        Box::new(move |_cc| Ok(Box::new(LifeScatterApp::new(state)))),
    )
}
