//! Dynamic row record

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use super::Value;

/// A single row of the dataset: a mapping from field name to [`Value`].
///
/// The map is ordered so that iteration (detail-panel fallback rendering,
/// nested summaries) is deterministic. Missing fields are represented by
/// `None` on access, never by an error.
///
/// # Example
///
/// ```
/// use gridview::row::Record;
///
/// let row = Record::new()
///     .set("firstName", "Ann")
///     .set("age", 34i64);
///
/// assert_eq!(row.display_text("firstName"), "Ann");
/// assert_eq!(row.display_text("missing"), "");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Field access
    // =========================================================================

    /// Returns the field value, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Resolves a dotted path (`address.city`) through nested records.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.get(segments.next()?)?;

        for segment in segments {
            match current {
                Value::Record(record) => current = record.get(segment)?,
                _ => return None,
            }
        }

        Some(current)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns all fields in name order.
    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    /// The display text for a field; missing fields render as empty text.
    pub fn display_text(&self, field: &str) -> String {
        self.get(field).map(Value::display_text).unwrap_or_default()
    }

    /// The display text for a dotted path; missing paths render as empty text.
    pub fn display_text_at(&self, path: &str) -> String {
        self.get_path(path)
            .map(Value::display_text)
            .unwrap_or_default()
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }
}
