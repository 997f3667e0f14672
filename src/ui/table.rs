use eframe::egui::{self, Key, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::sort::{format_percent, SortDirection, SortKey};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel – frequency table for the selected column
// ---------------------------------------------------------------------------

/// Render the filter controls and the value distribution.
pub fn frequency_panel(ui: &mut Ui, state: &mut AppState) {
    if state.dataset().is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to explore it  (File → Open…)");
        });
        return;
    }

    let Some(column) = state.selected_column().map(|c| c.to_string()) else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Select a column to view its value distribution");
        });
        return;
    };

    ui.heading(format!("Details for: {column}"));
    ui.label(filter_summary_text(state));
    ui.add_space(4.0);

    // ---- Filter input row ----
    ui.horizontal(|ui: &mut Ui| {
        let input = ui.add(
            egui::TextEdit::singleline(&mut state.filter_input)
                .hint_text("Filter values…")
                .desired_width(260.0),
        );
        let submitted =
            input.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
        if submitted || ui.button("Apply Filter").clicked() {
            state.submit_filter();
        }
        if ui.button("Clear Filters").clicked() {
            state.clear_filters();
        }
    });
    ui.add_space(4.0);

    // ---- Distribution table ----
    if state.distribution().is_empty() {
        ui.label("No data available");
        return;
    }

    let mut toggled: Option<SortKey> = None;
    let mut clicked_value: Option<String> = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .sense(egui::Sense::click())
        .column(Column::remainder().at_least(120.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(80.0))
        .header(20.0, |mut header| {
            let spec = state.sort_spec();
            for (key, text) in [
                (SortKey::Value, "Value"),
                (SortKey::Count, "Count"),
                (SortKey::Percentage, "Percentage"),
            ] {
                header.col(|ui| {
                    let active = spec.key == key;
                    let label = header_label(state, key, text);
                    if ui.selectable_label(active, label).clicked() {
                        toggled = Some(key);
                    }
                });
            }
        })
        .body(|mut body| {
            for entry in state.distribution() {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&entry.value);
                    });
                    row.col(|ui| {
                        ui.label(entry.count.to_string());
                    });
                    row.col(|ui| {
                        ui.label(format_percent(entry.percent));
                    });
                    if row.response().clicked() {
                        clicked_value = Some(entry.value.clone());
                    }
                });
            }
        });

    if let Some(key) = toggled {
        state.toggle_sort(key);
    }
    // Clicking a row pre-fills the filter input with its value.
    if let Some(value) = clicked_value {
        state.filter_input = value;
    }
}

fn header_label(state: &AppState, key: SortKey, text: &str) -> RichText {
    let spec = state.sort_spec();
    if spec.key == key {
        let arrow = match spec.direction {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        };
        RichText::new(format!("{text} {arrow}"))
    } else {
        RichText::new(text)
    }
}

fn filter_summary_text(state: &AppState) -> String {
    let summary = state.filter_summary();
    if summary.is_empty() {
        "Filter: none".to_string()
    } else {
        let parts: Vec<String> = summary
            .iter()
            .map(|(col, n)| format!("{col} ({n})"))
            .collect();
        format!("Filter: {}", parts.join(", "))
    }
}
