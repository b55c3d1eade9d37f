//! Server Commands
//!
//! Frontend bindings to the page's HTTP endpoints.

mod link;

use std::fmt;

use async_trait::async_trait;
use wasm_bindgen::JsValue;

use crate::models::LinkOrder;

pub use link::*;

/// Where a finished link order is persisted
#[async_trait(?Send)]
pub trait OrderStore {
    /// Returns the HTTP status of the response
    async fn save(&self, order: &LinkOrder) -> Result<u16, RequestError>;
}

/// Failure of a request before any response arrived
#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    /// No `window` (not running in a browser)
    NoWindow,
    Serialize(String),
    /// The browser refused to build the request
    Build(String),
    /// `fetch` rejected: offline, CORS, aborted...
    Network(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::NoWindow => write!(f, "No window available"),
            RequestError::Serialize(msg) => write!(f, "Serialize error: {}", msg),
            RequestError::Build(msg) => write!(f, "Invalid request: {}", msg),
            RequestError::Network(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for RequestError {}

/// Readable text for a thrown JS value
pub(crate) fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
