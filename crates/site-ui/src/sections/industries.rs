//! Industries grid with hover emphasis.

use leptos::prelude::*;
use site_core::content::{INDUSTRIES, INDUSTRIES_COPY};

use crate::components::SectionTitle;
use crate::components::reveal::{reveal_class, stagger_delay, use_reveal};
use crate::config::use_site_config;

/// Tile styling for the hovered and resting states.
#[must_use]
pub fn tile_class(hovered: bool) -> &'static str {
    if hovered {
        "industry-tile rounded-xl p-6 text-center bg-blue-600 text-white shadow-lg scale-105"
    } else {
        "industry-tile rounded-xl p-6 text-center bg-white text-slate-800 shadow-sm"
    }
}

#[component]
pub fn Industries() -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();
    let revealed = use_reveal(node, use_site_config().reveal.industries);
    let hovered = RwSignal::new(None::<usize>);

    view! {
        <section id="industries" class="py-24 bg-white">
            <div class="container mx-auto px-6">
                <SectionTitle copy=INDUSTRIES_COPY />
                <div node_ref=node class="grid grid-cols-2 gap-4 md:grid-cols-3 lg:grid-cols-4">
                    {INDUSTRIES
                        .into_iter()
                        .enumerate()
                        .map(|(index, industry)| {
                            let delay = u32::try_from(index).unwrap_or(0).saturating_mul(50);
                            view! {
                                <div
                                    class=move || reveal_class("transition-transform", revealed.get())
                                    style=stagger_delay(delay)
                                    on:mouseenter=move |_| hovered.set(Some(index))
                                    on:mouseleave=move |_| hovered.set(None)
                                >
                                    <div class=move || tile_class(hovered.get() == Some(index))>
                                        <div class="text-3xl" aria-hidden="true">{industry.icon}</div>
                                        <div class="mt-3 font-semibold">{industry.title}</div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
