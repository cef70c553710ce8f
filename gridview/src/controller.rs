//! Interaction controller: owns the UI state and drives every re-render.

use std::collections::BTreeMap;

use log::{debug, warn};
use viewtree::{find_element_mut, replace_element, Element};

use crate::detail::DetailTemplate;
use crate::error::LoadError;
use crate::filter;
use crate::render::{self, ids};
use crate::row::Record;
use crate::sort::{self, SortDirection};
use crate::source::RowSource;
use crate::store::{Column, RowId, RowStore};

/// The grid's state machine.
///
/// Owns three independent state slices — per-column sort direction, the
/// search term, and the expanded row — plus the derived display order and
/// the mounted tree. The host wires user input to the three `on_*`
/// operations and re-reads [`tree`](Self::tree) after each one; every
/// transition is synchronous and runs to completion.
///
/// Until a dataset is installed the controller renders an empty body and
/// every operation degrades to a no-op over zero rows.
#[derive(Debug)]
pub struct GridController {
    store: RowStore,
    template: DetailTemplate,
    /// Direction each column's next activation applies. Absent means never
    /// activated, i.e. ascending.
    pending: BTreeMap<String, SortDirection>,
    /// The currently applied sort, if any.
    applied: Option<(String, SortDirection)>,
    term: String,
    /// Expanded row, keyed by stable id so it survives re-sorting.
    expanded: Option<RowId>,
    /// Current display order of the body.
    order: Vec<RowId>,
    tree: Element,
}

impl GridController {
    /// Declare the columns and build the initial (empty) tree.
    pub fn new(columns: Vec<Column>) -> Self {
        let mut controller = Self {
            store: RowStore::new(columns),
            template: DetailTemplate::default(),
            pending: BTreeMap::new(),
            applied: None,
            term: String::new(),
            expanded: None,
            order: Vec::new(),
            tree: Element::box_(),
        };
        controller.tree = controller.render_tree();
        controller
    }

    /// Configure the detail panel template.
    pub fn with_detail_template(mut self, template: DetailTemplate) -> Self {
        self.template = template;
        self.tree = self.render_tree();
        self
    }

    // =========================================================================
    // Data intake
    // =========================================================================

    /// Await a one-shot fetch and install the result.
    ///
    /// On failure the error is returned and the controller keeps its
    /// pre-load empty state; no retry is attempted.
    pub async fn load(&mut self, source: &(impl RowSource + ?Sized)) -> Result<usize, LoadError> {
        let rows = source.fetch().await?;
        let count = rows.len();
        self.set_rows(rows);
        Ok(count)
    }

    /// Install the dataset and rebuild the body.
    ///
    /// An applied sort is recomputed against the new rows; expansion is
    /// cleared because stable ids of the previous dataset are meaningless.
    pub fn set_rows(&mut self, rows: Vec<Record>) {
        self.store.set_rows(rows);
        self.expanded = None;
        self.order = match &self.applied {
            Some((column, direction)) => sort::sorted_order(&self.store, column, *direction),
            None => self.store.entries().map(|(id, _)| id).collect(),
        };
        self.rebuild_body();
        self.rebuild_detail();
    }

    // =========================================================================
    // Interaction surface
    // =========================================================================

    /// Search-submit: recompute visibility over the current display order.
    ///
    /// Only per-row hidden flags (and the mirrored input value) change; the
    /// body structure, sort state and expansion are untouched.
    pub fn on_search_submit(&mut self, term: &str) {
        self.term = term.to_string();
        if let Some(input) = find_element_mut(&mut self.tree, ids::SEARCH_INPUT) {
            input.set_input_value(term);
        }
        self.apply_visibility();
        debug!(
            "search {:?}: {}/{} rows visible",
            term,
            self.visible_count(),
            self.store.len()
        );
    }

    /// Header-click: sort by the column's pending direction and flip it.
    ///
    /// The full store is reordered, the active search term re-applied
    /// against the new order, and the body subtree swapped. Other columns'
    /// pending directions are unaffected. The expanded row, being keyed by
    /// stable id, keeps showing the same record.
    pub fn on_header_activate(&mut self, key: &str) {
        if self.store.column(key).is_none() {
            warn!("header activation for undeclared column {key:?} ignored");
            return;
        }

        let direction = self.pending.get(key).copied().unwrap_or_default();
        self.order = sort::sorted_order(&self.store, key, direction);
        self.applied = Some((key.to_string(), direction));
        self.pending.insert(key.to_string(), direction.toggled());

        self.rebuild_body();
        self.refresh_header();
        debug!("sorted by {key:?} {direction:?}");
    }

    /// Body-row-click: toggle expansion for the row at a display position.
    ///
    /// Activating the expanded row collapses it; any other row becomes the
    /// sole expanded row. Out-of-range positions are ignored.
    pub fn on_row_activate(&mut self, position: usize) {
        let Some(id) = self.order.get(position).copied() else {
            warn!("row activation at position {position} ignored (out of range)");
            return;
        };

        if self.expanded == Some(id) {
            self.expanded = None;
            debug!("row {id} collapsed");
        } else {
            self.expanded = Some(id);
            debug!("row {id} expanded");
        }
        self.rebuild_detail();
    }

    // =========================================================================
    // Read access
    // =========================================================================

    /// The mounted display tree.
    pub fn tree(&self) -> &Element {
        &self.tree
    }

    pub fn store(&self) -> &RowStore {
        &self.store
    }

    pub fn search_term(&self) -> &str {
        &self.term
    }

    pub fn expanded(&self) -> Option<RowId> {
        self.expanded
    }

    /// The currently applied sort, if any.
    pub fn applied_sort(&self) -> Option<(&str, SortDirection)> {
        self.applied
            .as_ref()
            .map(|(column, direction)| (column.as_str(), *direction))
    }

    /// The direction the column's next activation will apply.
    pub fn pending_direction(&self, key: &str) -> SortDirection {
        self.pending.get(key).copied().unwrap_or_default()
    }

    /// Current display order, as stable ids.
    pub fn order(&self) -> &[RowId] {
        &self.order
    }

    /// Rows currently visible under the active search term.
    pub fn visible_count(&self) -> usize {
        filter::visibility(&self.store, &self.order, &self.term)
            .into_iter()
            .filter(|visible| *visible)
            .count()
    }

    // =========================================================================
    // Tree maintenance
    // =========================================================================

    fn display_entries(&self) -> Vec<(RowId, &Record)> {
        self.order
            .iter()
            .filter_map(|id| self.store.record(*id).map(|record| (*id, record)))
            .collect()
    }

    fn expanded_entry(&self) -> Option<(RowId, &Record)> {
        self.expanded
            .and_then(|id| self.store.record(id).map(|record| (id, record)))
    }

    fn render_tree(&self) -> Element {
        let entries = self.display_entries();
        let visible = filter::visibility(&self.store, &self.order, &self.term);
        render::render_grid(
            self.store.columns(),
            &entries,
            &visible,
            &self.pending,
            &self.term,
            self.expanded_entry(),
            &self.template,
        )
    }

    fn rebuild_body(&mut self) {
        let body = {
            let entries = self.display_entries();
            let visible = filter::visibility(&self.store, &self.order, &self.term);
            render::render_body(self.store.columns(), &entries, &visible)
        };
        replace_element(&mut self.tree, ids::BODY, body);
    }

    fn rebuild_detail(&mut self) {
        let detail = render::render_detail(self.store.columns(), self.expanded_entry(), &self.template);
        replace_element(&mut self.tree, ids::DETAIL, detail);
    }

    /// Toggle row hidden flags in place; never rebuilds the body.
    fn apply_visibility(&mut self) {
        let visible = filter::visibility(&self.store, &self.order, &self.term);
        let Some(body) = find_element_mut(&mut self.tree, ids::BODY) else {
            return;
        };
        if let Some(children) = body.content.children_mut() {
            for (row, visible) in children.iter_mut().zip(visible) {
                row.hidden = !visible;
            }
        }
    }

    /// Rewrite each header cell's glyph from its column's pending direction.
    fn refresh_header(&mut self) {
        let labels: Vec<(String, String)> = self
            .store
            .columns()
            .iter()
            .map(|column| {
                let direction = self.pending.get(&column.key).copied().unwrap_or_default();
                (
                    render::header_cell_id(&column.key),
                    render::header_label(column, direction),
                )
            })
            .collect();

        for (id, label) in labels {
            if let Some(cell) = find_element_mut(&mut self.tree, &id) {
                cell.set_text(label);
            }
        }
    }
}
