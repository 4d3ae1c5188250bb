//! About section with the why-choose-us list.

use leptos::prelude::*;
use site_core::content::{ABOUT_COPY, REASONS};

use crate::components::reveal::{reveal_class, stagger_delay, use_reveal};
use crate::components::{LinkVariant, ScrollLink, SectionTitle};
use crate::config::use_site_config;

#[component]
pub fn About() -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();
    let revealed = use_reveal(node, use_site_config().reveal.about_reasons);

    view! {
        <section id="about" class="py-24 bg-slate-50">
            <div class="container mx-auto px-6 grid gap-12 lg:grid-cols-2 items-start">
                <div>
                    <SectionTitle copy=ABOUT_COPY align_left=true />
                    <p class="text-slate-600">
                        "Our partners lead every engagement personally, backed by specialist teams in audit, tax, advisory and corporate services."
                    </p>
                    <div class="mt-8 flex flex-wrap gap-4">
                        <ScrollLink href="#contact" variant=LinkVariant::Primary>
                            "Work with us"
                        </ScrollLink>
                        <ScrollLink href="#careers" variant=LinkVariant::Secondary>
                            "Join our team"
                        </ScrollLink>
                    </div>
                </div>

                <div node_ref=node class="rounded-2xl bg-white p-8 shadow-lg">
                    <h3 class="text-xl font-bold text-slate-900">"Why clients choose us"</h3>
                    <ul class="mt-6 space-y-4">
                        {REASONS
                            .into_iter()
                            .enumerate()
                            .map(|(index, reason)| {
                                let delay = u32::try_from(index).unwrap_or(0).saturating_mul(100);
                                view! {
                                    <li
                                        class=move || reveal_class("flex items-start gap-3", revealed.get())
                                        style=stagger_delay(delay)
                                    >
                                        <span class="text-xl" aria-hidden="true">{reason.icon}</span>
                                        <span class="text-slate-700">{reason.text}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}
