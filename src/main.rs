mod app;
mod data;
mod state;
mod ui;

use app::FacetViewApp;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional file to open at startup.
    let mut state = AppState::default();
    if let Some(arg) = std::env::args().nth(1) {
        match data::loader::load_file(std::path::Path::new(&arg)) {
            Ok(dataset) => {
                log::info!(
                    "loaded {} rows with columns {:?}",
                    dataset.row_count(),
                    dataset.columns()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("failed to load {arg}: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "FacetView – CSV Frequency Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(FacetViewApp::new(state)))),
    )
}
