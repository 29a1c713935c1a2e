use crate::color::{self, ChartColor, ExpressionLevel};
use crate::error::ViewError;

use super::model::{Dataset, GenomicRecord};

// ---------------------------------------------------------------------------
// Chart series – what the bar chart consumes
// ---------------------------------------------------------------------------

/// One bar series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    /// One colour per bar.
    pub background_color: Vec<ChartColor>,
    pub border_color: ChartColor,
    pub border_width: f32,
}

/// Labels along the x axis plus the series plotted against them.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

const BORDER_WIDTH: f32 = 2.0;

/// Aggregate a dataset into bar-chart series.
///
/// * variants   – one bar per chromosome (first-appearance order), value = count
/// * expression – one bar per record, value = expression, fill = level bucket
pub fn build_chart_series(dataset: &Dataset) -> Result<ChartData, ViewError> {
    match dataset {
        Dataset::Variants(records) => {
            let counts = count_by_chromosome(records.iter().map(|r| r as &dyn GenomicRecord));
            let (labels, data): (Vec<String>, Vec<f64>) = counts
                .into_iter()
                .map(|(chrom, n)| (chrom, n as f64))
                .unzip();
            Ok(ChartData {
                datasets: vec![ChartDataset {
                    label: "Variants per Chromosome".into(),
                    background_color: vec![color::variant_fill(); data.len()],
                    data,
                    border_color: color::variant_border(),
                    border_width: BORDER_WIDTH,
                }],
                labels,
            })
        }
        Dataset::Expression(records) => {
            if let Some(bad) = records.iter().find(|r| !r.expression.is_finite()) {
                return Err(ViewError::ChartRender(format!(
                    "expression value for {} is not a finite number",
                    bad.gene
                )));
            }
            Ok(ChartData {
                labels: records.iter().map(|r| r.gene.clone()).collect(),
                datasets: vec![ChartDataset {
                    label: "Gene Expression Level".into(),
                    data: records.iter().map(|r| r.expression).collect(),
                    background_color: records
                        .iter()
                        .map(|r| ExpressionLevel::from_value(r.expression).fill())
                        .collect(),
                    border_color: color::expression_border(),
                    border_width: BORDER_WIDTH,
                }],
            })
        }
    }
}

/// Count records per chromosome, keeping the order in which chromosomes first appear.
pub fn count_by_chromosome<'a>(
    records: impl Iterator<Item = &'a dyn GenomicRecord>,
) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for rec in records {
        match counts.iter_mut().find(|(c, _)| c == rec.chromosome()) {
            Some((_, n)) => *n += 1,
            None => counts.push((rec.chromosome().to_string(), 1)),
        }
    }
    counts
}
