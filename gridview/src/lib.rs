//! An embeddable, data-driven grid widget.
//!
//! Given a column list and a dataset, `gridview` maintains an interactive
//! table as a [`viewtree`] display tree: sortable columns, free-text row
//! search, and an expandable per-row detail panel. The host environment
//! mounts the tree, wires user input to the three operations on
//! [`GridController`] (`on_search_submit`, `on_header_activate`,
//! `on_row_activate`) and re-reads the tree after each one.
//!
//! ```no_run
//! use gridview::{Column, FileSource, GridController};
//!
//! # async fn run() -> Result<(), gridview::LoadError> {
//! let mut grid = GridController::new(vec![
//!     Column::new("id").width(6),
//!     Column::new("firstName").label("First name"),
//!     Column::new("lastName").label("Last name"),
//! ]);
//!
//! grid.load(&FileSource::new("users.json")).await?;
//! grid.on_header_activate("lastName");
//! grid.on_search_submit("ann");
//! let tree = grid.tree(); // hand to the host
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod detail;
pub mod error;
pub mod filter;
pub mod render;
pub mod row;
pub mod sort;
pub mod source;
pub mod store;

pub use controller::GridController;
pub use detail::{DetailField, DetailTemplate};
pub use error::LoadError;
pub use row::{Record, Value};
pub use sort::SortDirection;
pub use source::{FileSource, HttpSource, RowSource};
pub use store::{Column, RowId, RowStore};
