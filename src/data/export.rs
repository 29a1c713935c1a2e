use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use crate::error::ViewError;

use super::model::{Dataset, DatasetKind};

// ---------------------------------------------------------------------------
// Export formats
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Csv => "CSV",
        }
    }
}

/// `genome-data-<kind>-<unix-epoch-ms>.<ext>`
pub fn export_file_name(kind: DatasetKind, format: ExportFormat, epoch_ms: u128) -> String {
    format!("genome-data-{kind}-{epoch_ms}.{}", format.extension())
}

/// Milliseconds since the Unix epoch (0 if the clock is before it).
pub fn epoch_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Serialisers
// ---------------------------------------------------------------------------

/// Pretty-printed JSON array of the records, exactly as loaded.
pub fn to_json(dataset: &Dataset) -> Result<String, ViewError> {
    Ok(serde_json::to_string_pretty(dataset)?)
}

/// CSV with a header row using the serialised field names.
pub fn to_csv(dataset: &Dataset) -> Result<String, ViewError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    match dataset {
        Dataset::Variants(v) => {
            for rec in v {
                wtr.serialize(rec)?;
            }
        }
        Dataset::Expression(v) => {
            for rec in v {
                wtr.serialize(rec)?;
            }
        }
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes)
        .map_err(|e| ViewError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

pub fn serialize(dataset: &Dataset, format: ExportFormat) -> Result<String, ViewError> {
    match format {
        ExportFormat::Json => to_json(dataset),
        ExportFormat::Csv => to_csv(dataset),
    }
}

/// Write an already serialised export to disk.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents)
        .with_context(|| format!("writing export to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{ExpressionRecord, Variant};
    use crate::data::samples::{sample_expression, sample_variants};

    #[test]
    fn file_name_format() {
        assert_eq!(
            export_file_name(DatasetKind::Variants, ExportFormat::Json, 1700000000123),
            "genome-data-variants-1700000000123.json"
        );
        assert_eq!(
            export_file_name(DatasetKind::Expression, ExportFormat::Csv, 5),
            "genome-data-expression-5.csv"
        );
    }

    #[test]
    fn json_is_pretty_and_verbatim() {
        let ds = Dataset::Variants(sample_variants());
        let text = to_json(&ds).unwrap();
        assert!(text.starts_with("[\n  {\n    \"gene\": \"BRCA1\""));
        let back: Vec<Variant> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, sample_variants());
    }

    #[test]
    fn expression_json_keeps_float_values() {
        let text = to_json(&Dataset::Expression(sample_expression())).unwrap();
        let back: Vec<ExpressionRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(back[5].expression, 4.2);
    }

    #[test]
    fn csv_has_header_and_rows() {
        let text = to_csv(&Dataset::Variants(sample_variants())).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("gene,chromosome,position,ref,alt,type,significance")
        );
        assert_eq!(lines.next(), Some("BRCA1,chr17,43044295,A,G,SNP,pathogenic"));
        assert_eq!(text.lines().count(), 9);
        assert!(text.contains("EGFR,chr7,55191822,T,G,SNP,drug response"));
    }

    #[test]
    fn write_file_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let text = to_json(&Dataset::Expression(sample_expression())).unwrap();
        write_file(&path, &text).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), text);
    }

    #[test]
    fn write_file_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let err = write_file(&path, "[]").unwrap_err();
        assert!(format!("{err:#}").contains("writing export to"));
    }
}
