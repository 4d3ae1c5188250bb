//! Services carousel bound to a [`Carousel`] controller.
//!
//! The controller lives in local storage next to the component; the DOM only
//! ever sees its derived [`CarouselView`]. Timer ticks and user input both go
//! through [`drive`], so the rendered view is always the controller's.

use leptos::prelude::*;
use site_core::carousel::{Carousel, CarouselState, CarouselView, Slide};

use super::scroll_link::{LinkVariant, ScrollLink};
use crate::browser::IntervalScheduler;
use crate::config::use_site_config;

type Controller = StoredValue<Option<Carousel<IntervalScheduler>>, LocalStorage>;

/// Apply `action` to the mounted controller and publish the resulting view.
fn drive(
    controller: Controller,
    view: RwSignal<CarouselView>,
    action: impl FnOnce(&mut Carousel<IntervalScheduler>),
) {
    let next = controller
        .try_update_value(|slot| {
            slot.as_mut().map(|carousel| {
                action(carousel);
                carousel.view()
            })
        })
        .flatten();
    if let Some(next) = next {
        view.set(next);
    }
}

/// Class list for an indicator dot.
#[must_use]
pub fn dot_class(active: bool) -> &'static str {
    if active {
        "carousel-dot h-2.5 w-8 rounded-full bg-blue-600 transition-all"
    } else {
        "carousel-dot h-2.5 w-2.5 rounded-full bg-slate-300 hover:bg-slate-400 transition-all"
    }
}

#[component]
fn SlideCard(slide: Slide) -> impl IntoView {
    view! {
        <article class="carousel-slide w-full flex-shrink-0 px-4">
            <div class="h-full rounded-2xl bg-white p-8 shadow-lg border border-slate-100">
                <div class="text-4xl mb-4" aria-hidden="true">{slide.icon}</div>
                <h3 class="text-2xl font-bold text-slate-900">{slide.title}</h3>
                <p class="mt-1 text-blue-600 font-medium">{slide.subtitle}</p>
                <p class="mt-4 text-slate-600">{slide.description}</p>
                <ScrollLink href=slide.cta_target variant=LinkVariant::Secondary class="mt-6">
                    {slide.cta_label}
                </ScrollLink>
            </div>
        </article>
    }
}

/// Auto-advancing carousel of service cards.
///
/// Autoplay stops for good after the first manual navigation and pauses
/// while the pointer hovers or a touch is held. An empty slide list renders
/// nothing.
#[component]
pub fn ServiceCarousel(slides: Vec<Slide>) -> impl IntoView {
    let len = slides.len();
    if len == 0 {
        return ().into_any();
    }

    let interval = use_site_config().carousel.interval();
    let view_state = RwSignal::new(CarouselView::derive(CarouselState::initial(), len));
    let controller: Controller = StoredValue::new_local(None);

    let scheduler = IntervalScheduler::new(move |generation| {
        let advanced = controller
            .try_update_value(|slot| {
                slot.as_mut()
                    .and_then(|carousel| carousel.tick(generation).then(|| carousel.view()))
            })
            .flatten();
        if let Some(next) = advanced {
            view_state.set(next);
        }
    });
    controller.set_value(Some(Carousel::mount(slides.clone(), interval, scheduler)));

    on_cleanup(move || {
        if let Some(Some(carousel)) = controller.try_update_value(Option::take) {
            carousel.unmount();
        }
    });

    let cards = slides
        .into_iter()
        .map(|slide| view! { <SlideCard slide=slide /> })
        .collect_view();

    let dots = (0..len)
        .map(|index| {
            view! {
                <button
                    type="button"
                    class=move || dot_class(view_state.with(|v| v.is_active(index)))
                    aria-label=format!("Go to slide {}", index + 1)
                    on:click=move |_| drive(controller, view_state, move |c| c.go_to(index))
                ></button>
            }
        })
        .collect_view();

    view! {
        <div class="service-carousel relative">
            <div
                class="carousel-viewport overflow-hidden"
                on:mouseenter=move |_| drive(controller, view_state, |c| c.set_interacting(true))
                on:mouseleave=move |_| drive(controller, view_state, |c| c.set_interacting(false))
                on:touchstart=move |_| drive(controller, view_state, |c| c.set_interacting(true))
                on:touchend=move |_| drive(controller, view_state, |c| c.set_interacting(false))
            >
                <div
                    class="carousel-track flex transition-transform duration-500 ease-in-out"
                    style:transform=move || view_state.with(CarouselView::transform)
                >
                    {cards}
                </div>
            </div>

            <button
                type="button"
                class="carousel-arrow absolute left-0 top-1/2 -translate-y-1/2 h-10 w-10 rounded-full bg-white shadow"
                aria-label="Previous slide"
                on:click=move |_| drive(controller, view_state, Carousel::previous)
            >
                "‹"
            </button>
            <button
                type="button"
                class="carousel-arrow absolute right-0 top-1/2 -translate-y-1/2 h-10 w-10 rounded-full bg-white shadow"
                aria-label="Next slide"
                on:click=move |_| drive(controller, view_state, Carousel::next)
            >
                "›"
            </button>

            <div class="mt-8 flex justify-center gap-2">{dots}</div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_active_dot_then_wide_pill() {
        assert!(dot_class(true).contains("w-8"));
        assert!(dot_class(false).contains("w-2.5"));
    }
}
