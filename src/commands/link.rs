//! Link Commands
//!
//! Persisting the order of the link list.

use async_trait::async_trait;
use js_sys::Promise;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use super::{js_message, OrderStore, RequestError};
use crate::models::LinkOrder;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// POST the order as a JSON array to `endpoint`.
///
/// Any HTTP response counts as delivered; its status is returned for
/// diagnostics only.
pub async fn save_link_order(endpoint: &str, order: &LinkOrder) -> Result<u16, RequestError> {
    let window = web_sys::window().ok_or(RequestError::NoWindow)?;
    let body = order.to_json().map_err(|e| RequestError::Serialize(e.to_string()))?;
    let request = build_post(endpoint, &body).map_err(|e| RequestError::Build(js_message(&e)))?;

    let pending: Promise = window.fetch_with_request(&request);
    let value = JsFuture::from(pending)
        .await
        .map_err(|e| RequestError::Network(js_message(&e)))?;
    let response: Response = value
        .dyn_into()
        .map_err(|e| RequestError::Network(js_message(&e)))?;
    Ok(response.status())
}

/// The page's reorder endpoint
pub struct HttpOrderStore {
    endpoint: String,
}

impl HttpOrderStore {
    pub fn new(endpoint: &str) -> Self {
        Self { endpoint: endpoint.to_string() }
    }
}

#[async_trait(?Send)]
impl OrderStore for HttpOrderStore {
    async fn save(&self, order: &LinkOrder) -> Result<u16, RequestError> {
        save_link_order(&self.endpoint, order).await
    }
}

fn build_post(url: &str, body: &str) -> Result<Request, JsValue> {
    let headers = Headers::new()?;
    headers.set("Content-Type", JSON_CONTENT_TYPE)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));

    Request::new_with_str_and_init(url, &init)
}
