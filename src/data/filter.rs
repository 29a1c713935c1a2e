use super::model::{Dataset, GenomicRecord};

// ---------------------------------------------------------------------------
// Search predicate: case-insensitive substring on gene / chromosome
// ---------------------------------------------------------------------------

/// Normalise a raw query: trimmed and lower-cased.
/// Returns `None` for a blank query, which means "no filter".
pub fn normalize_query(query: &str) -> Option<String> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        None
    } else {
        Some(q)
    }
}

/// Whether a record's gene or chromosome contains the (already normalised) needle.
pub fn matches(record: &dyn GenomicRecord, needle: &str) -> bool {
    record.gene().to_lowercase().contains(needle)
        || record.chromosome().to_lowercase().contains(needle)
}

/// Return indices of records that pass the search query.
///
/// A blank query selects every record.
pub fn filtered_indices(dataset: &Dataset, query: &str) -> Vec<usize> {
    let Some(needle) = normalize_query(query) else {
        return (0..dataset.len()).collect();
    };
    dataset
        .records()
        .enumerate()
        .filter(|(_, rec)| matches(*rec, &needle))
        .map(|(i, _)| i)
        .collect()
}

/// Return a new dataset holding only the records that pass the query.
pub fn search(dataset: &Dataset, query: &str) -> Dataset {
    if normalize_query(query).is_none() {
        return dataset.clone();
    }
    dataset.select(&filtered_indices(dataset, query))
}
