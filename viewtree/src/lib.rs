//! A minimal display tree for embeddable widgets.
//!
//! Widgets build a tree of [`Element`] nodes — labeled boxes, rows, columns,
//! text and text inputs, each with an id and free-form data attributes — and
//! hand it to a host environment to mount. The host decides what "mounting"
//! means (DOM, terminal, test buffer); this crate only models the tree and
//! the operations widgets need to keep it current: lookup by id, in-place
//! subtree replacement, and visibility toggling.

pub mod element;
pub mod text;
pub mod types;

pub use element::{find_element, find_element_mut, replace_element, Content, Element};
pub use types::{Direction, TextAlign};
