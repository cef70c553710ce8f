//! Filter engine: per-row visibility from a free-text search term.

use crate::row::Record;
use crate::store::{Column, RowId, RowStore};

/// Whether a row stays visible under the given term.
///
/// A row matches when any of its rendered cells — the declared columns'
/// display texts — contains the term as a case-insensitive substring.
/// Fields not bound to a column do not participate. The empty term matches
/// every row.
pub fn row_matches(record: &Record, columns: &[Column], term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    columns
        .iter()
        .any(|column| record.display_text(&column.key).to_lowercase().contains(&needle))
}

/// Visibility of each row of `order`, in display order.
///
/// Ids without a backing record (out of range for the store) are reported
/// hidden rather than failing.
pub fn visibility(store: &RowStore, order: &[RowId], term: &str) -> Vec<bool> {
    order
        .iter()
        .map(|id| {
            store
                .record(*id)
                .is_some_and(|row| row_matches(row, store.columns(), term))
        })
        .collect()
}
