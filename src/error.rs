use thiserror::Error;

/// User-visible failures of the data view.
#[derive(Error, Debug)]
pub enum ViewError {
    #[error("no data to export, load some data first")]
    EmptyDataset,
    #[error("chart could not be built: {0}")]
    ChartRender(String),
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialisation failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV serialisation failed: {0}")]
    Csv(#[from] csv::Error),
}
