//! Filter and sort stage of the view pipeline.
//!
//! `compute` is a pure function of its inputs and is re-run on every
//! change to the records, the query or the favorites set.

use crate::models::UserRecord;
use crate::state::FavoritesStore;

use super::query::{SortDirection, ViewQuery};

/// Case-insensitive substring match on name, email or username.
///
/// An empty term matches every record.
pub fn matches_search(record: &UserRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    [&record.name, &record.email, &record.username]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Produce the filtered, ordered list for `query`.
///
/// Ordering compares the lowercased sort field and is stable: records
/// with equal keys keep their order from `records`.
pub fn compute<'a>(
    records: &'a [UserRecord],
    query: &ViewQuery,
    favorites: &FavoritesStore,
) -> Vec<&'a UserRecord> {
    let needle = query.search_term.to_lowercase();

    let mut keyed: Vec<(String, &UserRecord)> = records
        .iter()
        .filter(|record| matches_search(record, &needle))
        .filter(|record| !query.favorites_only || favorites.contains(record.id))
        .map(|record| (query.sort_key.field(record).to_lowercase(), record))
        .collect();

    match query.sort_direction {
        SortDirection::Ascending => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
        SortDirection::Descending => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
    }

    keyed.into_iter().map(|(_, record)| record).collect()
}
