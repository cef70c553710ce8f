//! Render engine: pure projection of grid state into a display tree.
//!
//! Every function here builds fresh [`Element`] subtrees from its inputs and
//! mutates nothing. The controller decides which subtree to swap into the
//! mounted tree; hosts address the parts through the stable ids in [`ids`].

use std::collections::BTreeMap;

use viewtree::text::pad_to_width;
use viewtree::{Element, TextAlign};

use crate::detail::DetailTemplate;
use crate::row::Record;
use crate::sort::SortDirection;
use crate::store::{Column, RowId};

/// Stable element ids for the fixed parts of the grid.
pub mod ids {
    pub const ROOT: &str = "grid-root";
    pub const SEARCH: &str = "grid-search";
    pub const SEARCH_INPUT: &str = "grid-search-input";
    pub const SEARCH_SUBMIT: &str = "grid-search-submit";
    pub const HEADER: &str = "grid-header";
    pub const BODY: &str = "grid-body";
    pub const DETAIL: &str = "grid-detail";
}

/// Data attribute keys carried by interactive elements.
pub mod data {
    /// On header cells: the column key to pass to `on_header_activate`.
    pub const COLUMN: &str = "column";
    /// On body rows: the display position to pass to `on_row_activate`.
    pub const POSITION: &str = "position";
    /// On body rows: the stable row id.
    pub const RECORD: &str = "record";
}

/// Id of the body row element for a stable row id.
pub fn row_element_id(id: RowId) -> String {
    format!("grid-row-{id}")
}

/// Id of the header cell element for a column key.
pub fn header_cell_id(key: &str) -> String {
    format!("grid-head-{key}")
}

/// Header cell text: label plus the column's direction indicator.
pub fn header_label(column: &Column, direction: SortDirection) -> String {
    format!("{} {}", column.label, direction.indicator())
}

/// The full grid tree. Built once at mount; afterwards the controller swaps
/// the body, toggles row visibility, rewrites header glyphs and fills or
/// clears the detail panel — the surrounding structure stays put.
pub fn render_grid(
    columns: &[Column],
    rows: &[(RowId, &Record)],
    visible: &[bool],
    pending: &BTreeMap<String, SortDirection>,
    term: &str,
    expanded: Option<(RowId, &Record)>,
    template: &DetailTemplate,
) -> Element {
    Element::col()
        .id(ids::ROOT)
        .child(render_search(term))
        .child(render_header(columns, pending))
        .child(render_body(columns, rows, visible))
        .child(render_detail(columns, expanded, template))
}

/// The search bar: a text input and a submit button.
pub fn render_search(term: &str) -> Element {
    Element::row()
        .id(ids::SEARCH)
        .child(
            Element::text_input(term)
                .id(ids::SEARCH_INPUT)
                .placeholder("Type search request..."),
        )
        .child(
            Element::text("Search")
                .id(ids::SEARCH_SUBMIT)
                .clickable(true),
        )
}

/// The header row: one clickable cell per column, glyph per that column's
/// pending direction (ascending until first sorted).
pub fn render_header(columns: &[Column], pending: &BTreeMap<String, SortDirection>) -> Element {
    let cells = columns.iter().map(|column| {
        let direction = pending.get(&column.key).copied().unwrap_or_default();
        Element::text(header_label(column, direction))
            .id(header_cell_id(&column.key))
            .clickable(true)
            .data(data::COLUMN, column.key.clone())
    });

    Element::row().id(ids::HEADER).children(cells)
}

/// The body: one row element per record, in display order.
pub fn render_body(columns: &[Column], rows: &[(RowId, &Record)], visible: &[bool]) -> Element {
    let row_elements = rows.iter().enumerate().map(|(position, (id, record))| {
        let hidden = !visible.get(position).copied().unwrap_or(true);
        render_row(columns, position, *id, record).hidden(hidden)
    });

    Element::col().id(ids::BODY).children(row_elements)
}

fn render_row(columns: &[Column], position: usize, id: RowId, record: &Record) -> Element {
    let cells = columns.iter().map(|column| {
        Element::text(pad_to_width(
            &record.display_text(&column.key),
            column.width as usize,
            TextAlign::Left,
        ))
        .data(data::COLUMN, column.key.clone())
    });

    Element::row()
        .id(row_element_id(id))
        .clickable(true)
        .data(data::POSITION, position.to_string())
        .data(data::RECORD, id.to_string())
        .children(cells)
}

/// The detail panel. Hidden and empty unless a row is expanded; expanded, it
/// carries the template heading plus one labeled line per entry.
pub fn render_detail(
    columns: &[Column],
    expanded: Option<(RowId, &Record)>,
    template: &DetailTemplate,
) -> Element {
    let Some((id, record)) = expanded else {
        return Element::col().id(ids::DETAIL).hidden(true);
    };

    let mut panel = Element::col()
        .id(ids::DETAIL)
        .data(data::RECORD, id.to_string());

    if let Some(heading) = template.heading_text(record) {
        panel = panel.child(Element::text(heading));
    }

    panel.children(
        template
            .entries(record, columns)
            .into_iter()
            .map(|(label, value)| {
                Element::row()
                    .child(Element::text(format!("{label}: ")))
                    .child(Element::text(value))
            }),
    )
}
