//! Declarative template for the expanded-row detail panel.

use crate::row::{Record, Value};
use crate::store::Column;

/// One line of the detail panel: a label and the dotted path it reads.
#[derive(Debug, Clone)]
pub struct DetailField {
    pub label: String,
    pub path: String,
}

impl DetailField {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Field-to-label mapping that drives the detail panel.
///
/// A template is a heading (display texts of the configured fields, joined
/// with spaces) plus a list of labeled entries. With no entries configured
/// the panel falls back to every field not already shown as a column,
/// descending one level into nested records.
///
/// # Example
///
/// ```
/// use gridview::detail::DetailTemplate;
///
/// let template = DetailTemplate::new()
///     .heading_field("firstName")
///     .heading_field("lastName")
///     .field("Description", "description")
///     .field("City", "address.city");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DetailTemplate {
    heading: Vec<String>,
    fields: Vec<DetailField>,
}

impl DetailTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field whose display text joins the panel heading.
    pub fn heading_field(mut self, path: impl Into<String>) -> Self {
        self.heading.push(path.into());
        self
    }

    /// Append a labeled entry.
    pub fn field(mut self, label: impl Into<String>, path: impl Into<String>) -> Self {
        self.fields.push(DetailField::new(label, path));
        self
    }

    /// The heading text for a record, if heading fields are configured and
    /// any of them resolves to non-empty text.
    pub fn heading_text(&self, record: &Record) -> Option<String> {
        if self.heading.is_empty() {
            return None;
        }

        let text = self
            .heading
            .iter()
            .map(|path| record.display_text_at(path))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        (!text.is_empty()).then_some(text)
    }

    /// The `(label, value text)` entries for a record.
    ///
    /// Configured entries render in order, missing paths as empty values.
    /// Without configured entries, falls back to the record's non-column
    /// fields: scalar fields become one entry each, nested records one entry
    /// per inner field labeled `outer.inner`.
    pub fn entries(&self, record: &Record, columns: &[Column]) -> Vec<(String, String)> {
        if !self.fields.is_empty() {
            return self
                .fields
                .iter()
                .map(|field| (field.label.clone(), record.display_text_at(&field.path)))
                .collect();
        }

        let mut entries = Vec::new();
        for (name, value) in record.fields() {
            if columns.iter().any(|column| &column.key == name) {
                continue;
            }
            match value {
                Value::Record(nested) => {
                    for (inner, inner_value) in nested.fields() {
                        entries.push((format!("{name}.{inner}"), inner_value.display_text()));
                    }
                }
                other => entries.push((name.clone(), other.display_text())),
            }
        }
        entries
    }
}
