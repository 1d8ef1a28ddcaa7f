//! Dublin To-Do Frontend Entry Point

mod app;
mod components;
mod context;
mod logging;
mod page_config;
mod storage;

use app::App;
use dublin_todo_core::TodoConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match page_config::load() {
        Ok(config) => (config, None),
        Err(e) => (TodoConfig::default(), Some(e)),
    };
    logging::init(config.log_level());
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "ignoring invalid page config");
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
