//! Link Page Frontend Entry Point

mod app;
mod commands;
mod config;
mod logging;
mod models;

use config::PageConfig;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    app::when_ready(&document, |doc| {
        app::start(doc, &PageConfig::default());
    });
}
