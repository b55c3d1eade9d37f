//! Page Configuration
//!
//! Where the controllers look in the page and where the order goes.

use leptos_dragdrop::{HelperOptions, ReorderOptions};

/// Endpoint receiving the link order
pub const REORDER_ENDPOINT: &str = "/link/reorder";

#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub reorder: ReorderOptions,
    pub reorder_endpoint: String,
    pub file_helpers: HelperOptions,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            reorder: ReorderOptions::default(),
            reorder_endpoint: REORDER_ENDPOINT.to_string(),
            file_helpers: HelperOptions::default(),
        }
    }
}
