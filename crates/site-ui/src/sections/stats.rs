//! Impact band: counters that start when the band scrolls into view.

use leptos::prelude::*;
use site_core::content::{IMPACT_STATS, Stat};

use crate::components::AnimatedCounter;
use crate::components::reveal::{reveal_class, stagger_delay, use_reveal};
use crate::config::use_site_config;

#[component]
fn ImpactCard(stat: Stat, revealed: ReadSignal<bool>, hovered: RwSignal<Option<&'static str>>) -> impl IntoView {
    let key = stat.key;
    let card_class = move || {
        let lift = if hovered.get() == Some(key) { " -translate-y-2 shadow-xl" } else { " shadow-md" };
        reveal_class(&format!("impact-card rounded-2xl bg-white p-8 text-center{lift}"), revealed.get())
    };

    view! {
        <div
            class=card_class
            style=stagger_delay(stat.delay_ms)
            on:mouseenter=move |_| hovered.set(Some(key))
            on:mouseleave=move |_| hovered.set(None)
        >
            <div class="text-3xl" aria-hidden="true">{stat.icon}</div>
            <div class="mt-3 text-4xl font-bold text-blue-600">
                <AnimatedCounter target=stat.target start=revealed suffix=stat.suffix />
            </div>
            <div class="mt-2 text-slate-600">{stat.label}</div>
        </div>
    }
}

#[component]
pub fn Stats() -> impl IntoView {
    let node = NodeRef::<leptos::html::Section>::new();
    let revealed = use_reveal(node, use_site_config().reveal.stats);
    let hovered = RwSignal::new(None::<&'static str>);

    view! {
        <section node_ref=node id="impact" class="py-20 bg-gradient-to-r from-blue-700 to-blue-900">
            <div class="container mx-auto px-6">
                <h2 class="text-center text-3xl font-bold text-white">"Our impact in numbers"</h2>
                <div class="mt-12 grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
                    {IMPACT_STATS
                        .into_iter()
                        .map(|stat| view! { <ImpactCard stat=stat revealed=revealed hovered=hovered /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
