//! WASM entry point for the CSR site
//!
//! Trunk compiles this to WASM. Configuration is read before telemetry so the
//! log filter can come from it; a bad config is reported once logging is up.

use leptos::prelude::*;
use site_core::{ResultExt, SiteConfig};
use site_ui::{App, config, telemetry};

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    let loaded = config::load_embedded();
    let filter = loaded
        .as_ref()
        .map_or_else(|_| SiteConfig::default().logging.filter, |c| c.logging.filter.clone());
    if let Err(e) = telemetry::init(&filter) {
        web_sys::console::error_1(&e.to_string().into());
    }
    let config = loaded.or_logged("embedded site.toml", SiteConfig::default());

    mount_to_body(move || {
        view! {
            <App config=config />
        }
    });
}
