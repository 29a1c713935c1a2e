use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Variant enums
// ---------------------------------------------------------------------------

/// Structural class of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariantType {
    #[serde(rename = "SNP")]
    Snp,
    #[serde(rename = "deletion")]
    Deletion,
    #[serde(rename = "insertion")]
    Insertion,
    #[serde(rename = "duplication")]
    Duplication,
    #[serde(rename = "indel")]
    Indel,
}

impl fmt::Display for VariantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VariantType::Snp => "SNP",
            VariantType::Deletion => "deletion",
            VariantType::Insertion => "insertion",
            VariantType::Duplication => "duplication",
            VariantType::Indel => "indel",
        };
        f.write_str(s)
    }
}

/// Clinical significance of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Significance {
    Pathogenic,
    #[serde(rename = "likely pathogenic")]
    LikelyPathogenic,
    #[serde(rename = "uncertain significance")]
    Uncertain,
    #[serde(rename = "likely benign")]
    LikelyBenign,
    Benign,
    #[serde(rename = "risk factor")]
    RiskFactor,
    #[serde(rename = "drug response")]
    DrugResponse,
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Significance::Pathogenic => "pathogenic",
            Significance::LikelyPathogenic => "likely pathogenic",
            Significance::Uncertain => "uncertain significance",
            Significance::LikelyBenign => "likely benign",
            Significance::Benign => "benign",
            Significance::RiskFactor => "risk factor",
            Significance::DrugResponse => "drug response",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A single genomic variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub gene: String,
    pub chromosome: String,
    pub position: u64,
    #[serde(rename = "ref")]
    pub reference: String,
    pub alt: String,
    #[serde(rename = "type")]
    pub variant_type: VariantType,
    pub significance: Significance,
}

/// Expression level of one gene in one tissue/condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionRecord {
    pub gene: String,
    pub chromosome: String,
    pub expression: f64,
    pub tissue: String,
    pub condition: String,
}

/// Fields shared by every record shape, used by search and stats.
pub trait GenomicRecord {
    fn gene(&self) -> &str;
    fn chromosome(&self) -> &str;
}

impl GenomicRecord for Variant {
    fn gene(&self) -> &str {
        &self.gene
    }

    fn chromosome(&self) -> &str {
        &self.chromosome
    }
}

impl GenomicRecord for ExpressionRecord {
    fn gene(&self) -> &str {
        &self.gene
    }

    fn chromosome(&self) -> &str {
        &self.chromosome
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Which record shape a dataset holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Variants,
    Expression,
}

impl DatasetKind {
    /// Lower-case tag used in export file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::Variants => "variants",
            DatasetKind::Expression => "expression",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered sequence of records of a single shape.
///
/// Serialises as a bare JSON array so exports contain the records verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Dataset {
    Variants(Vec<Variant>),
    Expression(Vec<ExpressionRecord>),
}

impl Dataset {
    pub fn kind(&self) -> DatasetKind {
        match self {
            Dataset::Variants(_) => DatasetKind::Variants,
            Dataset::Expression(_) => DatasetKind::Expression,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        match self {
            Dataset::Variants(v) => v.len(),
            Dataset::Expression(v) => v.len(),
        }
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the records through their shared fields.
    pub fn records(&self) -> Box<dyn Iterator<Item = &dyn GenomicRecord> + '_> {
        match self {
            Dataset::Variants(v) => Box::new(v.iter().map(|r| r as &dyn GenomicRecord)),
            Dataset::Expression(v) => Box::new(v.iter().map(|r| r as &dyn GenomicRecord)),
        }
    }

    /// Build a new dataset of the same kind from the records at `indices`.
    pub fn select(&self, indices: &[usize]) -> Dataset {
        match self {
            Dataset::Variants(v) => {
                Dataset::Variants(indices.iter().filter_map(|&i| v.get(i).cloned()).collect())
            }
            Dataset::Expression(v) => {
                Dataset::Expression(indices.iter().filter_map(|&i| v.get(i).cloned()).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::samples::{sample_expression, sample_variants};

    #[test]
    fn variant_serialises_with_short_field_names() {
        let variants = sample_variants();
        let json = serde_json::to_value(&variants[3]).unwrap();
        assert_eq!(json["gene"], "CFTR");
        assert_eq!(json["ref"], "CTT");
        assert_eq!(json["type"], "deletion");
        assert_eq!(json["significance"], "pathogenic");
        assert_eq!(json["position"], 117559590);
    }

    #[test]
    fn multi_word_significance_uses_spaces() {
        let json = serde_json::to_string(&Significance::DrugResponse).unwrap();
        assert_eq!(json, "\"drug response\"");
        assert_eq!(Significance::RiskFactor.to_string(), "risk factor");
        assert_eq!(serde_json::to_string(&VariantType::Snp).unwrap(), "\"SNP\"");
    }

    #[test]
    fn dataset_serialises_as_plain_array() {
        let ds = Dataset::Expression(sample_expression());
        let json = serde_json::to_value(&ds).unwrap();
        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), 8);
        assert_eq!(arr[0]["gene"], "GAPDH");
        assert_eq!(arr[0]["expression"], 8.5);
    }

    #[test]
    fn select_keeps_kind_and_order() {
        let ds = Dataset::Variants(sample_variants());
        let picked = ds.select(&[6, 0, 42]);
        assert_eq!(picked.kind(), DatasetKind::Variants);
        let genes: Vec<&str> = picked.records().map(|r| r.gene()).collect();
        assert_eq!(genes, ["ACE", "BRCA1"]);
    }
}
