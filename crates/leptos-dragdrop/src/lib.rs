//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop for server-rendered pages:
//! live reordering of a list and file drops onto helper elements.
//! The decision logic lives behind small surface traits and `PageHost`;
//! `dom` plugs in the browser.

pub mod reorder;
pub mod file_drop;
pub mod bind;
pub mod dom;

pub use reorder::{collect_order, insert_position, Bounds, InsertPosition, ReorderList, ReorderSurface};
pub use file_drop::{label_text, pair_helper, FileHelper, FileSelection, HelperCandidate, HelperSurface, HelperTheme, LABEL_PREFIX};
pub use bind::{bind_file_helpers, bind_reorder_list, HelperOptions, OnOrder, PageHost, ReorderOptions};
pub use dom::{DomHelper, DomList, DomPage};
