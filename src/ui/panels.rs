use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::loader::load_file;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – year selector
// ---------------------------------------------------------------------------

/// Render the left panel holding the year selector.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Year");
    ui.separator();

    if state.years.is_empty() {
        ui.label("No dataset loaded.");
        return;
    }

    // Clone so the selection can mutate state inside the combo box.
    let years = state.years.as_slice().to_vec();
    let current = state
        .selected_year
        .map(|y| y.to_string())
        .unwrap_or_default();

    egui::ComboBox::from_id_salt("year_list")
        .selected_text(current)
        .show_ui(ui, |ui: &mut Ui| {
            for year in years {
                if ui
                    .selectable_label(state.selected_year == Some(year), year.to_string())
                    .clicked()
                {
                    state.select_year(year);
                }
            }
        });

    ui.add_space(8.0);
    ui.label(format!("{} countries shown", state.point_count()));
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
            if ui
                .add_enabled(state.dataset.is_some(), egui::Button::new("Close"))
                .clicked()
            {
                state.close_dataset();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let name = ds
                .source
                .as_deref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            ui.label(format!("{name}: {} rows, {} years", ds.len(), state.years.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open country-year data")
        .add_filter("Supported files", &["csv", "tsv", "txt", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("TSV", &["tsv", "txt"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        load_into(state, &path);
    }
}

/// Load `path` and hand it to the state; failures keep the current dataset.
pub fn load_into(state: &mut AppState, path: &std::path::Path) {
    match load_file(path) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} rows from {} ({} skipped)",
                dataset.len(),
                path.display(),
                dataset.skipped_rows
            );
            state.set_dataset(dataset);
        }
        Err(e) => {
            log::error!("Failed to load {}: {e}", path.display());
            state.status_message = Some(format!("Error: {e}"));
        }
    }
}
