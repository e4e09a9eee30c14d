mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::MovieDashboardApp;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let mut config = DashboardConfig::load_or_default();
    if let Some(path) = std::env::args_os().nth(1) {
        config.data_path = PathBuf::from(path);
    }

    let mut state = AppState::new(config.clone());
    let data_path = config.data_path.clone();
    if data_path.exists() {
        state.load_path(&data_path);
    } else {
        log::warn!("Data file {} not found", data_path.display());
        state.status_message = Some(format!(
            "{} not found. Use File → Open… to pick a CSV.",
            data_path.display()
        ));
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Movie Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(MovieDashboardApp::new(state)))),
    )
}
