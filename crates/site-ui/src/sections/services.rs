//! Services section: carousel plus a custom-engagement call to action.

use leptos::prelude::*;
use site_core::content::{SERVICES_COPY, service_slides};

use crate::components::reveal::{reveal_class, use_reveal};
use crate::components::{LinkVariant, ScrollLink, SectionTitle, ServiceCarousel};
use crate::config::use_site_config;

#[component]
pub fn Services() -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();
    let revealed = use_reveal(node, use_site_config().reveal.services);

    view! {
        <section id="services" class="relative overflow-hidden py-16 bg-stone-200">
            <div class="relative z-10 mx-auto flex max-w-7xl flex-col gap-8 px-6">
                <SectionTitle copy=SERVICES_COPY />
                <ServiceCarousel slides=service_slides() />

                <div
                    node_ref=node
                    class=move || reveal_class("mx-auto mt-6 max-w-5xl rounded-2xl border-2 border-amber-600/60 bg-white/80 shadow-lg delay-700", revealed.get())
                >
                    <div class="flex flex-col items-center justify-between gap-4 p-4 md:flex-row md:p-5">
                        <div class="flex-1 text-left">
                            <h3 class="text-lg font-bold text-cyan-950">"Need a custom solution?"</h3>
                            <p class="text-sm leading-relaxed text-cyan-950/70">
                                "Every business is unique. Let's discuss how we can tailor our services to meet your specific needs and drive your success."
                            </p>
                        </div>
                        <ScrollLink href="#contact" variant=LinkVariant::Primary class="whitespace-nowrap">
                            "Schedule a consultation"
                        </ScrollLink>
                    </div>
                </div>
            </div>
        </section>
    }
}
