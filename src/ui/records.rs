use std::time::Duration;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::ExpressionLevel;
use crate::data::describe::{describe_items, ItemDescription, ItemLine};
use crate::data::model::Dataset;
use crate::state::{ViewController, ViewMode};

/// Delay between revealing consecutive items.
const RENDER_STEP: Duration = Duration::from_millis(10);

const TAG_BG: Color32 = Color32::from_rgb(102, 126, 234);

// ---------------------------------------------------------------------------
// Central panel – record list
// ---------------------------------------------------------------------------

pub fn records_view(ui: &mut Ui, state: &mut ViewController) {
    if state.dataset().is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Load some data to get started");
        });
        return;
    }

    let shown = state.advance_render();
    if state.render_pending() {
        ui.ctx().request_repaint_after(RENDER_STEP);
    }

    let Some(view) = state.view() else {
        return;
    };
    if view.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No results found");
        });
        return;
    }

    match state.view_mode {
        ViewMode::Cards => cards(ui, &describe_items(view, shown)),
        ViewMode::Table => table(ui, view, shown),
    }
}

fn cards(ui: &mut Ui, items: &[ItemDescription]) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.horizontal_wrapped(|ui: &mut Ui| {
                for item in items {
                    card(ui, item);
                }
            });
        });
}

fn card(ui: &mut Ui, item: &ItemDescription) {
    egui::Frame::group(ui.style())
        .inner_margin(10.0)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(220.0);
            ui.vertical(|ui: &mut Ui| {
                ui.heading(&item.title);
                for line in &item.lines {
                    item_line(ui, line);
                }
            });
        });
}

fn item_line(ui: &mut Ui, line: &ItemLine) {
    ui.horizontal_wrapped(|ui: &mut Ui| match line {
        ItemLine::Fields(fields) => {
            for (i, (label, value)) in fields.iter().enumerate() {
                if i > 0 {
                    ui.label("|");
                }
                ui.strong(format!("{label}:"));
                ui.label(value);
            }
        }
        ItemLine::Level {
            label,
            value,
            level,
        } => {
            ui.strong(format!("{label}:"));
            ui.label(RichText::new(value).strong().color(level.text_color()))
                .on_hover_text(format!("{level} expression"));
        }
        ItemLine::Tags(tags) => {
            for tag in tags {
                ui.label(
                    RichText::new(tag)
                        .small()
                        .color(Color32::WHITE)
                        .background_color(TAG_BG),
                );
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Table layout
// ---------------------------------------------------------------------------

fn table(ui: &mut Ui, view: &Dataset, shown: usize) {
    let headers: &[&str] = match view {
        Dataset::Variants(_) => &["Gene", "Location", "Variant", "Type", "Significance"],
        Dataset::Expression(_) => &["Gene", "Chromosome", "Expression", "Tissue", "Condition"],
    };
    let rows = shown.min(view.len());

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().at_least(80.0), headers.len() - 1)
        .column(Column::remainder())
        .header(22.0, |mut header| {
            for h in headers {
                header.col(|ui| {
                    ui.strong(*h);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows, |mut row| {
                let i = row.index();
                match view {
                    Dataset::Variants(v) => {
                        let r = &v[i];
                        row.col(|ui| {
                            ui.label(&r.gene);
                        });
                        row.col(|ui| {
                            ui.label(format!("{}:{}", r.chromosome, r.position));
                        });
                        row.col(|ui| {
                            ui.label(format!("{} → {}", r.reference, r.alt));
                        });
                        row.col(|ui| {
                            ui.label(r.variant_type.to_string());
                        });
                        row.col(|ui| {
                            ui.label(r.significance.to_string());
                        });
                    }
                    Dataset::Expression(v) => {
                        let r = &v[i];
                        let level = ExpressionLevel::from_value(r.expression);
                        row.col(|ui| {
                            ui.label(&r.gene);
                        });
                        row.col(|ui| {
                            ui.label(&r.chromosome);
                        });
                        row.col(|ui| {
                            ui.label(RichText::new(r.expression.to_string()).color(level.text_color()));
                        });
                        row.col(|ui| {
                            ui.label(&r.tissue);
                        });
                        row.col(|ui| {
                            ui.label(&r.condition);
                        });
                    }
                }
            });
        });
}
