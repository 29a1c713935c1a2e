use std::path::Path;

use anyhow::Result;

use crate::data::chart::{build_chart_series, ChartData};
use crate::data::export::{self, ExportFormat};
use crate::data::filter;
use crate::data::model::{Dataset, DatasetKind};
use crate::data::samples;
use crate::data::stats::{compute_stats, DatasetStats};
use crate::error::ViewError;

// ---------------------------------------------------------------------------
// Chart handle
// ---------------------------------------------------------------------------

/// The live chart, owned exclusively by the controller.
#[derive(Debug)]
pub struct ChartHandle {
    pub data: ChartData,
    /// Render generation the chart was built for.
    pub generation: u64,
}

impl Drop for ChartHandle {
    fn drop(&mut self) {
        log::debug!("released chart for generation {}", self.generation);
    }
}

/// How items are laid out in the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Cards,
    Table,
}

// ---------------------------------------------------------------------------
// Data view controller
// ---------------------------------------------------------------------------

/// The full view state, independent of rendering.
#[derive(Debug, Default)]
pub struct ViewController {
    /// Loaded dataset (None until a sample is loaded; never empty).
    current: Option<Dataset>,

    /// Records currently shown: the search result over `current`.
    view: Option<Dataset>,

    /// Text of the search field.
    pub query: String,

    /// Summary counts of `view`.
    pub stats: DatasetStats,

    chart: Option<ChartHandle>,

    /// Bumped on every load, search and clear.
    generation: u64,

    /// Incremental render progress: (generation, items shown).
    rendered: (u64, usize),

    pub view_mode: ViewMode,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl ViewController {
    pub fn dataset(&self) -> Option<&Dataset> {
        self.current.as_ref()
    }

    pub fn kind(&self) -> Option<DatasetKind> {
        self.current.as_ref().map(Dataset::kind)
    }

    /// The filtered records being displayed.
    pub fn view(&self) -> Option<&Dataset> {
        self.view.as_ref()
    }

    /// The chart to draw, if one should be visible.
    pub fn chart(&self) -> Option<&ChartData> {
        self.chart.as_ref().map(|c| &c.data)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the loaded dataset wholesale and reset the search.
    pub fn load(&mut self, dataset: Dataset) {
        if dataset.is_empty() {
            self.clear();
            return;
        }
        log::info!("Loaded {} {} records", dataset.len(), dataset.kind());
        self.query.clear();
        self.current = Some(dataset.clone());
        self.status_message = None;
        self.show(dataset);
    }

    pub fn load_sample(&mut self, kind: DatasetKind) {
        self.load(samples::sample(kind));
    }

    /// Reset to the empty state and release the chart.
    pub fn clear(&mut self) {
        log::info!("Cleared dataset");
        self.current = None;
        self.view = None;
        self.query.clear();
        self.stats = DatasetStats::default();
        self.release_chart();
        self.status_message = None;
        self.generation += 1;
    }

    /// Filter the loaded dataset by `query` and show the result.
    ///
    /// Returns the filtered records, or `None` when nothing is loaded.
    pub fn search(&mut self, query: &str) -> Option<Dataset> {
        let current = self.current.as_ref()?;
        let result = filter::search(current, query);
        log::info!(
            "Search {:?}: {} of {} records",
            query.trim(),
            result.len(),
            current.len()
        );
        self.show(result.clone());
        Some(result)
    }

    /// Run [`search`](Self::search) with the text in the search field.
    pub fn search_current_query(&mut self) {
        let query = self.query.clone();
        self.search(&query);
    }

    fn show(&mut self, view: Dataset) {
        self.stats = compute_stats(&view);
        self.generation += 1;
        self.rebuild_chart(&view);
        self.view = Some(view);
    }

    fn release_chart(&mut self) {
        // Dropping the handle frees the previous chart before a new one exists.
        drop(self.chart.take());
    }

    /// Rebuild the chart for `view`; failures hide the chart instead of propagating.
    fn rebuild_chart(&mut self, view: &Dataset) {
        self.release_chart();
        if view.is_empty() {
            return;
        }
        match build_chart_series(view) {
            Ok(data) => {
                self.chart = Some(ChartHandle {
                    data,
                    generation: self.generation,
                });
            }
            Err(e) => {
                log::error!("error creating chart: {e:#}");
            }
        }
    }

    /// Advance incremental rendering by one item and return how many items to show.
    ///
    /// Progress restarts from zero whenever the generation has moved on, so
    /// items of a superseded view are never shown.
    pub fn advance_render(&mut self) -> usize {
        let total = self.view.as_ref().map_or(0, Dataset::len);
        if self.rendered.0 != self.generation {
            log::debug!("render restarted for generation {}", self.generation);
            self.rendered = (self.generation, 0);
        }
        if self.rendered.1 < total {
            self.rendered.1 += 1;
        }
        self.rendered.1
    }

    /// Whether incremental rendering still has items to reveal.
    pub fn render_pending(&self) -> bool {
        let total = self.view.as_ref().map_or(0, Dataset::len);
        self.rendered.0 != self.generation || self.rendered.1 < total
    }

    // -----------------------------------------------------------------------
    // Export
    // -----------------------------------------------------------------------

    fn loaded(&self) -> Result<&Dataset, ViewError> {
        self.current.as_ref().ok_or(ViewError::EmptyDataset)
    }

    /// Pretty JSON of the loaded (unfiltered) dataset.
    pub fn export_json(&self) -> Result<String, ViewError> {
        export::to_json(self.loaded()?)
    }

    pub fn export_csv(&self) -> Result<String, ViewError> {
        export::to_csv(self.loaded()?)
    }

    /// Suggested file name for an export made at `epoch_ms`.
    pub fn export_file_name(&self, format: ExportFormat, epoch_ms: u128) -> Result<String, ViewError> {
        let ds = self.loaded()?;
        Ok(export::export_file_name(ds.kind(), format, epoch_ms))
    }

    /// Serialise the loaded dataset and write it to `path`.
    pub fn export_to(&self, path: &Path, format: ExportFormat) -> Result<()> {
        let contents = export::serialize(self.loaded()?, format)?;
        export::write_file(path, &contents)?;
        log::info!("data exported to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::GenomicRecord;
    use crate::data::samples::sample_expression;

    #[test]
    fn starts_empty() {
        let state = ViewController::default();
        assert!(state.dataset().is_none());
        assert!(state.kind().is_none());
        assert!(state.chart().is_none());
        assert_eq!(state.stats, DatasetStats::default());
    }

    #[test]
    fn load_sets_kind_stats_and_chart() {
        let mut state = ViewController::default();
        state.load_sample(DatasetKind::Variants);
        assert_eq!(state.kind(), Some(DatasetKind::Variants));
        assert_eq!(state.stats.total, 8);
        assert_eq!(state.stats.chromosomes, 5);
        let chart = state.chart().unwrap();
        assert_eq!(chart.labels.len(), 5);
    }

    #[test]
    fn loading_empty_records_is_a_clear() {
        let mut state = ViewController::default();
        state.load_sample(DatasetKind::Expression);
        state.load(Dataset::Variants(Vec::new()));
        assert!(state.kind().is_none());
        assert!(state.dataset().is_none());
        assert!(state.chart().is_none());
    }

    #[test]
    fn clear_then_export_is_empty_dataset() {
        let mut state = ViewController::default();
        state.load_sample(DatasetKind::Variants);
        state.query = "brca".into();
        state.clear();
        assert!(state.query.is_empty());
        assert!(state.chart().is_none());
        assert_eq!(state.stats, DatasetStats::default());
        assert!(matches!(state.export_json(), Err(ViewError::EmptyDataset)));
        assert!(matches!(state.export_csv(), Err(ViewError::EmptyDataset)));
    }

    #[test]
    fn search_filters_view_and_stats_but_not_dataset() {
        let mut state = ViewController::default();
        state.load_sample(DatasetKind::Variants);
        let result = state.search("chr7").unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(state.view().unwrap().len(), 2);
        assert_eq!(state.stats.total, 2);
        assert_eq!(state.stats.chromosomes, 1);
        assert_eq!(state.chart().unwrap().labels, ["chr7"]);
        assert_eq!(state.dataset().unwrap().len(), 8);

        // export is of the loaded dataset, not the view
        let json = state.export_json().unwrap();
        assert!(json.contains("BRCA1"));
    }

    #[test]
    fn blank_search_restores_everything() {
        let mut state = ViewController::default();
        state.load_sample(DatasetKind::Expression);
        state.search("tp53");
        assert_eq!(state.stats.total, 1);
        let all = state.search("  ").unwrap();
        assert_eq!(all, Dataset::Expression(sample_expression()));
        assert_eq!(state.stats.total, 8);
        assert_eq!(state.stats.chromosomes, 6);
    }

    #[test]
    fn search_with_nothing_loaded_is_noop() {
        let mut state = ViewController::default();
        assert!(state.search("tp53").is_none());
        assert!(state.view().is_none());
    }

    #[test]
    fn no_matches_hides_chart() {
        let mut state = ViewController::default();
        state.load_sample(DatasetKind::Variants);
        let result = state.search("zzz").unwrap();
        assert!(result.is_empty());
        assert!(state.chart().is_none());
        assert_eq!(state.stats, DatasetStats::default());
    }

    #[test]
    fn load_resets_previous_search() {
        let mut state = ViewController::default();
        state.load_sample(DatasetKind::Variants);
        state.query = "brca".into();
        state.search_current_query();
        assert_eq!(state.view().unwrap().len(), 1);
        state.load_sample(DatasetKind::Expression);
        assert!(state.query.is_empty());
        assert_eq!(state.view().unwrap().len(), 8);
        assert_eq!(state.kind(), Some(DatasetKind::Expression));
    }

    #[test]
    fn chart_failure_hides_chart_without_failing_load() {
        let mut records = sample_expression();
        records[0].expression = f64::INFINITY;
        let mut state = ViewController::default();
        state.load(Dataset::Expression(records));
        assert!(state.chart().is_none());
        assert_eq!(state.stats.total, 8);
        assert!(state.export_json().is_ok());
    }

    #[test]
    fn incremental_render_restarts_on_new_generation() {
        let mut state = ViewController::default();
        state.load_sample(DatasetKind::Variants);
        assert_eq!(state.advance_render(), 1);
        assert_eq!(state.advance_render(), 2);
        assert_eq!(state.advance_render(), 3);

        state.search("chr17");
        assert!(state.render_pending());
        assert_eq!(state.advance_render(), 1);
        assert_eq!(state.advance_render(), 2);
        assert_eq!(state.advance_render(), 3);
        assert_eq!(state.advance_render(), 3);
        assert!(!state.render_pending());

        let shown: Vec<&str> = state.view().unwrap().records().map(|r| r.gene()).collect();
        assert_eq!(shown, ["BRCA1", "TP53", "ACE"]);
    }

    #[test]
    fn export_file_name_uses_kind() {
        let mut state = ViewController::default();
        assert!(state.export_file_name(ExportFormat::Json, 1).is_err());
        state.load_sample(DatasetKind::Expression);
        assert_eq!(
            state.export_file_name(ExportFormat::Json, 42).unwrap(),
            "genome-data-expression-42.json"
        );
    }

    #[test]
    fn export_to_writes_the_loaded_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("variants.json");
        let mut state = ViewController::default();
        assert!(state.export_to(&path, ExportFormat::Json).is_err());
        assert!(!path.exists());

        state.load_sample(DatasetKind::Variants);
        state.search("brca");
        state.export_to(&path, ExportFormat::Json).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, state.export_json().unwrap());
    }
}
