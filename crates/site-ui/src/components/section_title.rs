//! Eyebrow, heading and lede shared by the content sections.

use leptos::prelude::*;
use site_core::content::SectionCopy;

use super::reveal::{reveal_class, use_reveal};
use crate::config::use_site_config;

#[component]
pub fn SectionTitle(copy: SectionCopy, #[prop(optional)] align_left: bool) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();
    let revealed = use_reveal(node, use_site_config().reveal.section_title);
    let align = if align_left { "text-left" } else { "text-center mx-auto" };

    view! {
        <div node_ref=node class=move || reveal_class(&format!("section-title max-w-3xl mb-12 {align}"), revealed.get())>
            <span class="eyebrow text-sm font-semibold uppercase tracking-wider text-blue-600">
                {copy.eyebrow}
            </span>
            <h2 class="mt-3 text-3xl md:text-4xl font-bold text-slate-900">{copy.title}</h2>
            <p class="mt-4 text-lg text-slate-600">{copy.description}</p>
        </div>
    }
}
