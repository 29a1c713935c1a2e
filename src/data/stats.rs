use std::collections::BTreeSet;

use super::model::Dataset;

/// Summary counts shown in the side panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetStats {
    pub total: usize,
    pub chromosomes: usize,
    pub genes: usize,
}

/// Count records, distinct chromosomes and distinct genes (exact string match).
pub fn compute_stats(dataset: &Dataset) -> DatasetStats {
    let mut chromosomes: BTreeSet<&str> = BTreeSet::new();
    let mut genes: BTreeSet<&str> = BTreeSet::new();
    for rec in dataset.records() {
        chromosomes.insert(rec.chromosome());
        genes.insert(rec.gene());
    }
    DatasetStats {
        total: dataset.len(),
        chromosomes: chromosomes.len(),
        genes: genes.len(),
    }
}
