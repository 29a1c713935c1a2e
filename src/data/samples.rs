use super::model::{
    Dataset, DatasetKind, ExpressionRecord, Significance, Variant, VariantType,
};

// ---------------------------------------------------------------------------
// Built-in sample datasets
// ---------------------------------------------------------------------------

fn variant(
    gene: &str,
    chromosome: &str,
    position: u64,
    reference: &str,
    alt: &str,
    variant_type: VariantType,
    significance: Significance,
) -> Variant {
    Variant {
        gene: gene.to_string(),
        chromosome: chromosome.to_string(),
        position,
        reference: reference.to_string(),
        alt: alt.to_string(),
        variant_type,
        significance,
    }
}

fn expression(
    gene: &str,
    chromosome: &str,
    expression: f64,
    tissue: &str,
    condition: &str,
) -> ExpressionRecord {
    ExpressionRecord {
        gene: gene.to_string(),
        chromosome: chromosome.to_string(),
        expression,
        tissue: tissue.to_string(),
        condition: condition.to_string(),
    }
}

/// Eight well-known clinical variants.
pub fn sample_variants() -> Vec<Variant> {
    use Significance::*;
    use VariantType::*;
    vec![
        variant("BRCA1", "chr17", 43044295, "A", "G", Snp, Pathogenic),
        variant("TP53", "chr17", 7676154, "C", "T", Snp, Pathogenic),
        variant("APOE", "chr19", 44908684, "T", "C", Snp, RiskFactor),
        variant("CFTR", "chr7", 117559590, "CTT", "C", Deletion, Pathogenic),
        variant("HBB", "chr11", 5227002, "T", "A", Snp, Pathogenic),
        variant("MTHFR", "chr1", 11856378, "C", "T", Snp, Benign),
        variant("ACE", "chr17", 63488529, "A", "G", Snp, Benign),
        variant("EGFR", "chr7", 55191822, "T", "G", Snp, DrugResponse),
    ]
}

/// Eight expression measurements across tissues and conditions.
pub fn sample_expression() -> Vec<ExpressionRecord> {
    vec![
        expression("GAPDH", "chr12", 8.5, "liver", "control"),
        expression("ACTB", "chr7", 9.2, "muscle", "control"),
        expression("TNF", "chr6", 3.4, "blood", "inflammatory"),
        expression("IL6", "chr7", 5.8, "blood", "inflammatory"),
        expression("INS", "chr11", 7.9, "pancreas", "control"),
        expression("TP53", "chr17", 4.2, "tumor", "cancer"),
        expression("MYC", "chr8", 6.7, "tumor", "cancer"),
        expression("VEGF", "chr6", 5.1, "endothelial", "hypoxia"),
    ]
}

/// The sample dataset for a given kind.
pub fn sample(kind: DatasetKind) -> Dataset {
    match kind {
        DatasetKind::Variants => Dataset::Variants(sample_variants()),
        DatasetKind::Expression => Dataset::Expression(sample_expression()),
    }
}
