//! Landing hero: headline, what-we-deliver card, counters and a pointer
//! parallax on the background glows.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use site_core::content::{DELIVERABLES, HERO_STATS, Stat};

use crate::components::reveal::stagger_delay;
use crate::components::{AnimatedCounter, LinkVariant, ScrollLink};

/// Pointer position relative to the hero's top-left corner, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    /// Offset of a client-space point from a box whose top-left corner is
    /// at `(left, top)`.
    #[must_use]
    pub fn within(client_x: f64, client_y: f64, left: f64, top: f64) -> Self {
        Self {
            x: client_x - left,
            y: client_y - top,
        }
    }
}

/// Per-layer parallax factors; negative layers drift against the pointer.
pub const PARALLAX_FACTORS: [f64; 3] = [0.02, -0.015, 0.01];

/// Layer shift for a layer moving `factor` pixels per pointer pixel.
#[must_use]
pub fn parallax_shift(pointer: PointerOffset, factor: f64) -> PointerOffset {
    PointerOffset {
        x: pointer.x * factor,
        y: pointer.y * factor,
    }
}

/// CSS transform for [`parallax_shift`].
#[must_use]
pub fn parallax_transform(pointer: PointerOffset, factor: f64) -> String {
    let shift = parallax_shift(pointer, factor);
    format!("translate({}px, {}px)", shift.x, shift.y)
}

const GLOW_LAYERS: [&str; 3] = [
    "absolute -left-10 top-10 h-96 w-96 rounded-full bg-white/20 blur-3xl transition-transform duration-300",
    "absolute right-0 bottom-10 h-96 w-96 rounded-full bg-amber-600/30 blur-3xl transition-transform duration-300",
    "absolute left-1/2 top-1/2 h-64 w-64 rounded-full bg-cyan-100/20 blur-3xl transition-transform duration-300",
];

#[component]
fn HeroStat(stat: Stat) -> impl IntoView {
    view! {
        <div class="hero-stat animate-fade-in" style=stagger_delay(stat.delay_ms)>
            <div class="text-3xl font-bold text-amber-500">
                <AnimatedCounter target=stat.target start=true suffix=stat.suffix />
            </div>
            <div class="mt-1 text-sm text-cyan-100">{stat.label}</div>
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let section = NodeRef::<leptos::html::Section>::new();
    let pointer = RwSignal::new(PointerOffset::default());
    let (visible, set_visible) = signal(false);
    Effect::new(move |_| set_visible.set(true));

    let on_mouse_move = move |ev: MouseEvent| {
        let Some(element) = section.get_untracked() else {
            return;
        };
        let rect = element.get_bounding_client_rect();
        pointer.set(PointerOffset::within(
            f64::from(ev.client_x()),
            f64::from(ev.client_y()),
            rect.left(),
            rect.top(),
        ));
    };

    let glows = GLOW_LAYERS
        .into_iter()
        .zip(PARALLAX_FACTORS)
        .map(|(class, factor)| {
            view! { <div class=class style:transform=move || parallax_transform(pointer.get(), factor)></div> }
        })
        .collect_view();

    let lead_class = move || {
        if visible.get() {
            "flex-1 space-y-6 transition-all duration-1000 opacity-100 translate-y-0"
        } else {
            "flex-1 space-y-6 transition-all duration-1000 opacity-0 translate-y-12"
        }
    };
    let card_class = move || {
        if visible.get() {
            "flex-1 transition-all duration-1000 delay-300 opacity-100 translate-x-0"
        } else {
            "flex-1 transition-all duration-1000 delay-300 opacity-0 translate-x-12"
        }
    };

    view! {
        <section
            node_ref=section
            id="home"
            class="relative overflow-hidden min-h-screen flex items-center bg-gradient-to-br from-cyan-950 via-cyan-700 to-cyan-950 text-stone-200"
            on:mousemove=on_mouse_move
        >
            <div class="absolute inset-0 opacity-20">{glows}</div>

            <div class="relative z-10 mx-auto flex max-w-6xl flex-col gap-8 px-6 py-12 lg:flex-row lg:items-center lg:py-16">
                <div class=lead_class>
                    <div class="inline-flex items-center gap-2 rounded-full border border-amber-600/30 bg-amber-600/20 px-4 py-2 backdrop-blur-sm">
                        <span class="h-2 w-2 rounded-full bg-amber-600 animate-pulse"></span>
                        <p class="text-sm font-semibold uppercase tracking-wide text-amber-600">
                            "Trusted business advisors"
                        </p>
                    </div>
                    <h1 class="text-5xl md:text-6xl lg:text-7xl font-bold leading-tight">
                        "Chartered Accountants with "
                        <span class="inline-block text-amber-600">"clarity"</span>
                        " and "
                        <span class="inline-block text-cyan-100">"confidence"</span>
                    </h1>
                    <p class="max-w-2xl text-lg md:text-xl leading-relaxed text-cyan-100">
                        "We pair financial discipline with practical insight to help businesses set up, stay compliant, and scale with certainty across India and beyond."
                    </p>
                    <div class="flex flex-col gap-4 sm:flex-row sm:items-center">
                        <ScrollLink href="#contact" variant=LinkVariant::Primary>
                            "Talk to us"
                        </ScrollLink>
                        <ScrollLink href="#services" variant=LinkVariant::Secondary class="border-white text-white">
                            "View services"
                        </ScrollLink>
                    </div>
                    <div class="grid grid-cols-2 gap-6 pt-4 sm:grid-cols-4">
                        {HERO_STATS.into_iter().map(|stat| view! { <HeroStat stat=stat /> }).collect_view()}
                    </div>
                </div>

                <div class=card_class>
                    <div class="rounded-2xl border border-white/20 bg-white/10 p-6 shadow-2xl backdrop-blur-lg">
                        <div class="rounded-xl border border-white/20 p-6">
                            <div class="mb-6 flex items-center gap-2">
                                <span class="h-8 w-1 rounded-full bg-amber-600"></span>
                                <div class="text-lg font-bold text-amber-600">"What we deliver"</div>
                            </div>
                            <ul class="space-y-4">
                                {DELIVERABLES
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, item)| {
                                        let delay = u32::try_from(index).unwrap_or(0).saturating_mul(100);
                                        view! {
                                            <li
                                                class=move || {
                                                    let state = if visible.get() { "opacity-100 translate-x-0" } else { "opacity-0 -translate-x-5" };
                                                    format!("flex items-start gap-3 text-base leading-relaxed transition-all duration-300 {state}")
                                                }
                                                style=stagger_delay(delay)
                                            >
                                                <span class="mt-0.5 text-xl" aria-hidden="true">{item.icon}</span>
                                                <span>{item.text}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
