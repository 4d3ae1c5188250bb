//! Fixed header with scroll-spy highlighting and a mobile menu.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use site_core::ResultExt;
use site_core::content::{FIRM_NAME, NAV_LINKS};
use site_core::nav::{NavLink, NavState};

use crate::browser::scroll::{measure_sections, scroll_y};
use crate::browser::{ScrollListener, attach_scroll_listener};
use crate::components::scroll_link::follow_anchor;
use crate::components::{LinkVariant, ScrollLink};
use crate::config::use_site_config;

/// Header background for the compact and transparent states.
#[must_use]
pub fn header_class(scrolled: bool) -> &'static str {
    if scrolled {
        "fixed inset-x-0 top-0 z-50 bg-white/95 backdrop-blur shadow-md py-3 transition-all"
    } else {
        "fixed inset-x-0 top-0 z-50 bg-transparent py-5 transition-all"
    }
}

/// Link colour for the highlighted and resting states.
#[must_use]
pub fn nav_link_class(active: bool) -> &'static str {
    if active {
        "nav-link font-semibold text-blue-600"
    } else {
        "nav-link font-medium text-slate-700 hover:text-blue-600"
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let config = use_site_config();
    let header_offset = config.nav.header_offset;
    let nav = RwSignal::new(NavState::new(config.nav, "home"));

    let section_ids: Vec<&'static str> = NAV_LINKS.iter().map(|link| link.section_id).collect();
    let listener: StoredValue<Option<ScrollListener>, LocalStorage> = StoredValue::new_local(None);
    match attach_scroll_listener(move || {
        let Some(y) = scroll_y().ok_or_log("scroll offset") else {
            return;
        };
        let sections = measure_sections(&section_ids);
        nav.update(|state| state.on_scroll(y, &sections));
    }) {
        Ok(handle) => listener.set_value(Some(handle)),
        Err(e) => tracing::warn!(error = %e, "scroll spy disabled"),
    }
    on_cleanup(move || {
        listener.try_update_value(Option::take);
    });

    let link = move |link: NavLink| {
        let href = link.href();
        let on_click = move |ev: MouseEvent| {
            ev.prevent_default();
            nav.update(NavState::close_menu);
            follow_anchor(&link.href(), header_offset);
        };
        view! {
            <a
                href=href
                class=move || nav_link_class(nav.with(|state| state.is_active(link.section_id)))
                on:click=on_click
            >
                {link.label}
            </a>
        }
    };

    view! {
        <header class=move || header_class(nav.with(NavState::is_scrolled))>
            <nav class="container mx-auto flex items-center justify-between px-6">
                <ScrollLink href="#home" class="text-xl font-bold text-slate-900">
                    {FIRM_NAME}
                </ScrollLink>

                <div class="hidden md:flex items-center gap-8">
                    {NAV_LINKS.into_iter().map(link).collect_view()}
                    <ScrollLink href="#contact" variant=LinkVariant::Primary>
                        "Contact Us"
                    </ScrollLink>
                </div>

                <button
                    type="button"
                    class="md:hidden text-2xl text-slate-800"
                    aria-label="Toggle menu"
                    aria-expanded=move || nav.with(NavState::is_menu_open).to_string()
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    {move || if nav.with(NavState::is_menu_open) { "✕" } else { "☰" }}
                </button>
            </nav>

            <Show when=move || nav.with(NavState::is_menu_open)>
                <div class="md:hidden bg-white shadow-lg">
                    <div class="flex flex-col gap-4 px-6 py-4">
                        {NAV_LINKS.into_iter().map(link).collect_view()}
                    </div>
                </div>
            </Show>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_scrolled_when_styling_header_then_compact_with_shadow() {
        assert!(header_class(true).contains("shadow-md"));
        assert!(header_class(false).contains("bg-transparent"));
    }

    #[test]
    fn given_active_section_when_styling_link_then_highlighted() {
        assert!(nav_link_class(true).contains("text-blue-600"));
        assert!(nav_link_class(false).contains("text-slate-700"));
    }
}
