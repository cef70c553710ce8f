//! Sort engine: derives an ordered copy of the row sequence.

use std::cmp::Ordering;

use log::trace;

use crate::row::Value;
use crate::store::{RowId, RowStore};

/// Sort direction for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The direction a further activation of the same column applies.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header indicator glyph.
    pub fn indicator(self) -> char {
        match self {
            SortDirection::Ascending => '▲',
            SortDirection::Descending => '▼',
        }
    }
}

const NULL: Value = Value::Null;

/// Rank used when two values are of different kinds. There is no defined
/// cross-type order; this keeps the comparison total without panicking.
fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Float(_) => 2,
        Value::String(_) => 3,
        Value::List(_) => 4,
        Value::Record(_) => 5,
    }
}

/// Three-way comparison with native ordering per kind: numeric for ints and
/// floats (including mixed int/float), lexicographic for strings. Mixed-kind
/// pairs fall back to the kind rank.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Float(x), Value::Float(y)) => x.total_cmp(y),
        (Value::Int(x), Value::Float(y)) => (*x as f64).total_cmp(y),
        (Value::Float(x), Value::Int(y)) => x.total_cmp(&(*y as f64)),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => {
            let rank = kind_rank(a).cmp(&kind_rank(b));
            if rank == Ordering::Equal {
                // Same kind without a native order (lists, records):
                // compare what the cell would display.
                a.display_text().cmp(&b.display_text())
            } else {
                trace!(
                    "cross-type comparison {} vs {}, ordering by kind",
                    a.type_name(),
                    b.type_name()
                );
                rank
            }
        }
    }
}

/// Reorder the full store by one column.
///
/// Returns a new id sequence of the same length; the store itself is never
/// mutated. The sort is stable: rows with equal keys keep their store order.
/// Rows missing the field compare as null (they sort first, ascending).
pub fn sorted_order(store: &RowStore, column: &str, direction: SortDirection) -> Vec<RowId> {
    let mut order: Vec<RowId> = store.entries().map(|(id, _)| id).collect();

    order.sort_by(|a, b| {
        let left = store
            .record(*a)
            .and_then(|row| row.get(column))
            .unwrap_or(&NULL);
        let right = store
            .record(*b)
            .and_then(|row| row.get(column))
            .unwrap_or(&NULL);

        let ordering = compare_values(left, right);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    order
}
