use crate::color::ExpressionLevel;

use super::model::{Dataset, ExpressionRecord, Variant};

/// One line of an item card.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemLine {
    /// `label: value` pairs laid out on a single line.
    Fields(Vec<(&'static str, String)>),
    /// An expression value highlighted with its bucket.
    Level {
        label: &'static str,
        value: String,
        level: ExpressionLevel,
    },
    /// Small badges.
    Tags(Vec<String>),
}

/// Backend-agnostic description of one record, rendered as a card.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDescription {
    pub title: String,
    pub lines: Vec<ItemLine>,
}

pub fn describe_variant(v: &Variant) -> ItemDescription {
    ItemDescription {
        title: v.gene.clone(),
        lines: vec![
            ItemLine::Fields(vec![(
                "Location",
                format!("{}:{}", v.chromosome, v.position),
            )]),
            ItemLine::Fields(vec![(
                "Variant",
                format!("{} → {}", v.reference, v.alt),
            )]),
            ItemLine::Tags(vec![
                v.variant_type.to_string(),
                v.significance.to_string(),
            ]),
        ],
    }
}

pub fn describe_expression(r: &ExpressionRecord) -> ItemDescription {
    ItemDescription {
        title: r.gene.clone(),
        lines: vec![
            ItemLine::Fields(vec![("Chromosome", r.chromosome.clone())]),
            ItemLine::Level {
                label: "Expression Level",
                value: r.expression.to_string(),
                level: ExpressionLevel::from_value(r.expression),
            },
            ItemLine::Fields(vec![
                ("Tissue", r.tissue.clone()),
                ("Condition", r.condition.clone()),
            ]),
        ],
    }
}

/// Describe the first `limit` records of a dataset.
pub fn describe_items(dataset: &Dataset, limit: usize) -> Vec<ItemDescription> {
    match dataset {
        Dataset::Variants(v) => v.iter().take(limit).map(describe_variant).collect(),
        Dataset::Expression(v) => v.iter().take(limit).map(describe_expression).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::samples::{sample_expression, sample_variants};

    #[test]
    fn variant_card_layout() {
        let item = describe_variant(&sample_variants()[3]);
        assert_eq!(item.title, "CFTR");
        assert_eq!(
            item.lines,
            vec![
                ItemLine::Fields(vec![("Location", "chr7:117559590".to_string())]),
                ItemLine::Fields(vec![("Variant", "CTT → C".to_string())]),
                ItemLine::Tags(vec!["deletion".to_string(), "pathogenic".to_string()]),
            ]
        );
    }

    #[test]
    fn expression_card_layout() {
        let item = describe_expression(&sample_expression()[5]);
        assert_eq!(item.title, "TP53");
        assert_eq!(item.lines.len(), 3);
        assert_eq!(
            item.lines[1],
            ItemLine::Level {
                label: "Expression Level",
                value: "4.2".to_string(),
                level: ExpressionLevel::Low,
            }
        );
        assert_eq!(
            item.lines[2],
            ItemLine::Fields(vec![
                ("Tissue", "tumor".to_string()),
                ("Condition", "cancer".to_string()),
            ])
        );
    }

    #[test]
    fn limit_truncates() {
        let ds = Dataset::Variants(sample_variants());
        assert_eq!(describe_items(&ds, 3).len(), 3);
        assert_eq!(describe_items(&ds, 100).len(), 8);
    }
}
