use eframe::egui::{Stroke, Ui};
use egui_plot::{Bar, BarChart, Corner, Legend, Plot};

use crate::state::ViewController;

// ---------------------------------------------------------------------------
// Bar chart (bottom panel)
// ---------------------------------------------------------------------------

/// Render the chart built for the current view.
pub fn bar_chart(ui: &mut Ui, state: &ViewController) {
    let Some(chart) = state.chart() else {
        return;
    };

    let labels = chart.labels.clone();
    let charts: Vec<BarChart> = chart
        .datasets
        .iter()
        .map(|series| {
            let stroke = Stroke::new(series.border_width, series.border_color.to_color32());
            let bars: Vec<Bar> = series
                .data
                .iter()
                .enumerate()
                .map(|(i, &value)| {
                    let mut bar = Bar::new(i as f64, value).width(0.6).stroke(stroke);
                    if let Some(name) = labels.get(i) {
                        bar = bar.name(name);
                    }
                    if let Some(fill) = series.background_color.get(i) {
                        bar = bar.fill(fill.to_color32());
                    }
                    bar
                })
                .collect();
            BarChart::new(bars)
                .name(&series.label)
                .color(series.border_color.to_color32())
        })
        .collect();

    // Plot ids are keyed by generation so bounds reset for each new view.
    Plot::new(("bar_chart", state.generation()))
        .legend(Legend::default().position(Corner::LeftTop))
        .include_y(0.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}
