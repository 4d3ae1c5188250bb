//! Animated statistic counter.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use site_core::counter::{CounterAnimation, CounterSpec};

use crate::browser::interval::period_millis;
use crate::config::use_site_config;

/// Drive a [`CounterAnimation`] once `start` becomes true.
///
/// The animation runs at most once per mount. The interval is released as
/// soon as the target is reached, or on unmount, whichever comes first.
pub fn use_counter(spec: CounterSpec, start: Signal<bool>) -> ReadSignal<u32> {
    let (value, set_value) = signal(0_u32);
    let (finished, set_finished) = signal(false);
    let timer: StoredValue<Option<Interval>, LocalStorage> = StoredValue::new_local(None);

    Effect::new(move |_| {
        if !start.get() || finished.get_untracked() || timer.with_value(Option::is_some) {
            return;
        }
        let mut animation = CounterAnimation::start(spec);
        if animation.is_finished() {
            set_value.set(animation.value());
            set_finished.set(true);
            return;
        }
        tracing::trace!(target_value = spec.target, "counter started");
        let interval = Interval::new(period_millis(spec.step_interval()), move || {
            if let Some(next) = animation.advance() {
                set_value.set(next);
            }
            if animation.is_finished() {
                set_finished.set(true);
            }
        });
        timer.set_value(Some(interval));
    });

    Effect::new(move |_| {
        if finished.get() {
            timer.try_update_value(Option::take);
        }
    });

    on_cleanup(move || {
        timer.try_update_value(Option::take);
    });

    value
}

/// Display text, e.g. `1000+`.
#[must_use]
pub fn format_count(value: u32, suffix: &str) -> String {
    format!("{value}{suffix}")
}

/// Counter that climbs to `target` once `start` is true.
#[component]
pub fn AnimatedCounter(
    target: u32,
    #[prop(into)] start: Signal<bool>,
    #[prop(optional)] suffix: &'static str,
) -> impl IntoView {
    let spec = use_site_config().counter.spec_for(target);
    let value = use_counter(spec, start);

    view! { <span class="counter-value tabular-nums">{move || format_count(value.get(), suffix)}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_suffix_when_formatting_then_appended() {
        assert_eq!(format_count(1000, "+"), "1000+");
    }

    #[test]
    fn given_no_suffix_when_formatting_then_bare_number() {
        assert_eq!(format_count(0, ""), "0");
    }
}
