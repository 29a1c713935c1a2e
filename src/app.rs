use eframe::egui;

use crate::state::ViewController;
use crate::ui::{panels, plot, records};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct GenomeViewerApp {
    pub state: ViewController,
}

impl eframe::App for GenomeViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: toolbar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: search + stats ----
        egui::SidePanel::left("search_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: chart ----
        if self.state.chart().is_some() {
            egui::TopBottomPanel::bottom("chart_panel")
                .default_height(300.0)
                .resizable(true)
                .show(ctx, |ui| {
                    plot::bar_chart(ui, &self.state);
                });
        }

        // ---- Central panel: records ----
        egui::CentralPanel::default().show(ctx, |ui| {
            records::records_view(ui, &mut self.state);
        });
    }
}
