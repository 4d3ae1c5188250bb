//! Root application component
//!
//! Provides the site configuration as context and renders the home page.
//! Routing is not needed: the whole site is one scrolling page.

use leptos::prelude::*;
use site_core::SiteConfig;

use crate::pages::Home;

/// Root component; every descendant reads `config` via `use_site_config`.
#[component]
pub fn App(#[prop(optional)] config: SiteConfig) -> impl IntoView {
    tracing::debug!(interval_ms = config.carousel.interval_ms, "mounting site");
    provide_context(config);

    view! { <Home /> }
}
