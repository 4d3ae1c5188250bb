//! Scroll-triggered reveal hook.

use leptos::html::ElementType;
use leptos::prelude::*;
use site_core::reveal::{RevealLatch, Threshold};
use wasm_bindgen::JsCast;

use crate::browser::ObserverGuard;

/// Returns a signal that flips to `true` the first time the element behind
/// `target` crosses `threshold` and never flips back.
///
/// Without `IntersectionObserver` support the content is revealed at once.
pub fn use_reveal<E>(target: NodeRef<E>, threshold: Threshold) -> ReadSignal<bool>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let (revealed, set_revealed) = signal(false);
    let guard: StoredValue<Option<ObserverGuard>, LocalStorage> = StoredValue::new_local(None);

    Effect::new(move |_| {
        let Some(node) = target.get() else {
            return;
        };
        let element: web_sys::Element = node.unchecked_into();
        let mut latch = RevealLatch::new();
        match ObserverGuard::observe(&element, threshold, move |is_intersecting| {
            if latch.observe(is_intersecting) {
                set_revealed.set(true);
            }
        }) {
            Ok(observer) => guard.set_value(Some(observer)),
            Err(e) => {
                tracing::warn!(error = %e, "reveal observer unavailable, showing content");
                set_revealed.set(true);
            }
        }
    });

    // The guard cannot be dropped from inside its own callback, so release
    // the observation once the signal has settled.
    Effect::new(move |_| {
        if revealed.get() {
            guard.with_value(|slot| {
                if let Some(observer) = slot {
                    observer.unobserve();
                }
            });
        }
    });

    on_cleanup(move || {
        guard.try_update_value(Option::take);
    });

    revealed
}

/// Class list for an element that fades and slides in when revealed.
#[must_use]
pub fn reveal_class(base: &str, revealed: bool) -> String {
    let state = if revealed {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-8"
    };
    format!("{base} transition-all duration-700 {state}")
}

/// Inline `transition-delay` for staggered children.
#[must_use]
pub fn stagger_delay(delay_ms: u32) -> String {
    format!("transition-delay: {delay_ms}ms")
}
