//! Link Page App
//!
//! Attaches the list reorder and file helper controllers to the page.

use std::rc::Rc;

use leptos_dragdrop::DomPage;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::commands::{HttpOrderStore, OrderStore};
use crate::config::PageConfig;
use crate::models::LinkOrder;

/// Wire both controllers against the current DOM. Runs once; elements added
/// later are not picked up.
pub fn start(document: &Document, config: &PageConfig) {
    let page = DomPage::new(document.clone());
    let store = Rc::new(HttpOrderStore::new(&config.reorder_endpoint));
    let list_items = leptos_dragdrop::bind_reorder_list(&page, &config.reorder, move |ids| {
        persist_order(store.clone(), LinkOrder::new(ids));
    });
    let file_helpers = leptos_dragdrop::bind_file_helpers(&page, &config.file_helpers);

    log::debug!("wired {} list items, {} file helpers", list_items, file_helpers);
}

/// Send the order without waiting on it.
pub fn persist_order<S: OrderStore + 'static>(store: Rc<S>, order: LinkOrder) {
    spawn_local(async move {
        save_order(store.as_ref(), &order).await;
    });
}

/// Save one order. Failures are dropped: the list keeps showing the new
/// order and the server catches up on the next successful save.
pub async fn save_order<S: OrderStore + ?Sized>(store: &S, order: &LinkOrder) -> Option<u16> {
    match store.save(order).await {
        Ok(status) => {
            log::info!("order saved ({})", status);
            Some(status)
        }
        Err(e) => {
            log::debug!("order not saved: {}", e);
            None
        }
    }
}

/// `document.readyState` before the document is parsed
fn is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Run `f` once the document is parsed
pub fn when_ready<F>(document: &Document, f: F)
where
    F: FnOnce(&Document) + 'static,
{
    if !is_loading(&document.ready_state()) {
        f(document);
        return;
    }

    let doc = document.clone();
    let cb = Closure::once(move || f(&doc));
    if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref()) {
        log::error!("could not wait for DOMContentLoaded: {:?}", e);
    }
    cb.forget();
}
