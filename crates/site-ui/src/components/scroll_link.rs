//! Anchor that smooth-scrolls to an in-page section.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use site_core::ResultExt;
use site_core::nav::section_id_from_href;

use crate::browser::scroll_to_section;
use crate::config::use_site_config;

/// Visual treatment of a [`ScrollLink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkVariant {
    Primary,
    Secondary,
    #[default]
    Plain,
}

impl LinkVariant {
    #[must_use]
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Primary => {
                "inline-flex items-center px-6 py-3 rounded-lg bg-blue-600 text-white font-semibold hover:bg-blue-700 transition-colors"
            }
            Self::Secondary => {
                "inline-flex items-center px-6 py-3 rounded-lg border border-blue-600 text-blue-600 font-semibold hover:bg-blue-50 transition-colors"
            }
            Self::Plain => "hover:text-blue-600 transition-colors",
        }
    }
}

/// Scroll to the section named by `href`, leaving room for the header.
///
/// A bare `#` or an unknown id leaves the page where it is.
pub fn follow_anchor(href: &str, header_offset: f64) {
    let Some(section_id) = section_id_from_href(href) else {
        return;
    };
    scroll_to_section(section_id, header_offset).ok_or_log("anchor target");
}

#[component]
pub fn ScrollLink(
    #[prop(into)] href: String,
    #[prop(optional)] variant: LinkVariant,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let header_offset = use_site_config().nav.header_offset;
    let target = href.clone();
    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        follow_anchor(&target, header_offset);
    };

    view! {
        <a href=href class=format!("{} {class}", variant.classes()) on:click=on_click>
            {children()}
        </a>
    }
}
