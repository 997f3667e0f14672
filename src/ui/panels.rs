use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – column list
// ---------------------------------------------------------------------------

/// Render the column selector.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Columns");
    ui.separator();

    let dataset = match state.dataset() {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // Clone so the selection can mutate state inside the loop.
    let columns: Vec<String> = dataset.columns().to_vec();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for col in &columns {
                let selected = state.selected_column() == Some(col.as_str());
                if ui.selectable_label(selected, col).clicked() {
                    state.select_column(col);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let can_export = !state.distribution().is_empty();
            if ui
                .add_enabled(can_export, egui::Button::new("Export distribution…"))
                .clicked()
            {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if state.dataset().is_some() {
            ui.label(format!(
                "{} rows loaded, {} matching",
                state.total_row_count(),
                state.filtered_row_count()
            ));
            ui.separator();
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open tabular data")
        .add_filter("Supported files", &["csv", "tsv", "tab", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("TSV", &["tsv", "tab"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "loaded {} rows with columns {:?}",
                    dataset.row_count(),
                    dataset.columns()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

fn export_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export distribution")
        .add_filter("JSON", &["json"])
        .set_file_name("distribution.json")
        .save_file();

    if let Some(path) = file {
        match serde_json::to_string_pretty(state.distribution()) {
            Ok(json) => match std::fs::write(&path, json) {
                Ok(()) => log::info!("exported distribution to {}", path.display()),
                Err(e) => {
                    log::error!("failed to write {}: {e}", path.display());
                    state.status_message = Some(format!("Error: {e}"));
                }
            },
            Err(e) => {
                log::error!("failed to serialise distribution: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
