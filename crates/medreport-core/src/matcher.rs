//! First-match record lookup.
//!
//! Records are scanned in dataset order and each record's fields in its
//! column order. A record matches when any field's lower-cased text contains
//! the lower-cased query. The scan stops at the first matching record: the
//! result is the *first* hit, not the best one. Because the dataset is a
//! concatenation of sources, that means source-list order decides which row
//! wins when several sources contain the query.

use medreport_contracts::dataset::{Dataset, Record};

/// Return the first record with a field containing `query`, ignoring case.
///
/// A blank query never matches. Null fields and columns a record does not
/// carry are treated as empty text and never match. The query is compared
/// verbatim; trimming user input is the caller's job.
pub fn find_first<'a>(dataset: &'a Dataset, query: &str) -> Option<&'a Record> {
    find_first_index(dataset, query).map(|idx| &dataset.records()[idx])
}

/// Like [`find_first`], but returns the record's position in the dataset.
pub fn find_first_index(dataset: &Dataset, query: &str) -> Option<usize> {
    if query.trim().is_empty() {
        return None;
    }
    let needle = query.to_lowercase();

    dataset.iter().position(|record| record_matches(record, &needle))
}

/// True if any field of `record` contains `needle` (already lower-cased).
fn record_matches(record: &Record, needle: &str) -> bool {
    record
        .fields()
        .iter()
        .filter_map(|field| field.value.as_deref())
        .any(|value| value.to_lowercase().contains(needle))
}
