use eframe::egui::{self, Color32, Key, RichText, Ui};

use crate::data::export::{epoch_millis, ExportFormat};
use crate::data::model::DatasetKind;
use crate::error::ViewError;
use crate::state::{ViewController, ViewMode};

// ---------------------------------------------------------------------------
// Left side panel – search and summary counts
// ---------------------------------------------------------------------------

/// Render the left search / stats panel.
pub fn side_panel(ui: &mut Ui, state: &mut ViewController) {
    ui.heading("Search");
    ui.separator();

    let response = ui.add(
        egui::TextEdit::singleline(&mut state.query)
            .hint_text("gene or chromosome")
            .desired_width(f32::INFINITY),
    );
    let enter = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
    if ui.button("Search").clicked() || enter {
        state.search_current_query();
    }

    ui.add_space(12.0);
    ui.heading("Summary");
    ui.separator();

    egui::Grid::new("stats_grid")
        .num_columns(2)
        .spacing([24.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            stat_row(ui, "Total records", state.stats.total);
            stat_row(ui, "Chromosomes", state.stats.chromosomes);
            stat_row(ui, "Genes", state.stats.genes);
        });

    ui.add_space(12.0);
    ui.heading("Layout");
    ui.separator();
    ui.horizontal(|ui: &mut Ui| {
        ui.selectable_value(&mut state.view_mode, ViewMode::Cards, "Cards");
        ui.selectable_value(&mut state.view_mode, ViewMode::Table, "Table");
    });
}

fn stat_row(ui: &mut Ui, label: &str, value: usize) {
    ui.label(label);
    ui.strong(value.to_string());
    ui.end_row();
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut ViewController) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        if ui.button("Load variants").clicked() {
            state.load_sample(DatasetKind::Variants);
        }
        if ui.button("Load expression").clicked() {
            state.load_sample(DatasetKind::Expression);
        }
        if ui.button("Clear").clicked() {
            state.clear();
        }

        ui.separator();

        if ui.button("Export JSON").clicked() {
            save_file_dialog(state, ExportFormat::Json);
        }
        if ui.button("Export CSV").clicked() {
            save_file_dialog(state, ExportFormat::Csv);
        }

        ui.separator();

        if let (Some(ds), Some(view)) = (state.dataset(), state.view()) {
            ui.label(format!(
                "{} {} loaded, {} visible",
                ds.len(),
                ds.kind(),
                view.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn save_file_dialog(state: &mut ViewController, format: ExportFormat) {
    let file_name = match state.export_file_name(format, epoch_millis()) {
        Ok(name) => name,
        Err(e @ ViewError::EmptyDataset) => {
            log::warn!("Export refused: {e}");
            state.status_message = Some(e.to_string());
            return;
        }
        Err(e) => {
            log::error!("Failed to prepare export: {e:#}");
            state.status_message = Some(format!("Error: {e}"));
            return;
        }
    };

    let file = rfd::FileDialog::new()
        .set_title("Export genome data")
        .set_file_name(&file_name)
        .add_filter(format.label(), &[format.extension()])
        .save_file();

    if let Some(path) = file {
        match state.export_to(&path, format) {
            Ok(()) => {
                state.status_message = None;
            }
            Err(e) => {
                log::error!("error exporting data: {e:#}");
                state.status_message = Some(format!("failed to export data: {e:#}"));
            }
        }
    }
}
