//! Counter display behaviours

use site_core::config::CounterConfig;
use site_core::counter::CounterAnimation;

use crate::browser::interval::period_millis;
use crate::components::counter::format_count;

#[test]
fn given_default_timing_when_arming_interval_then_about_33ms() {
    let spec = CounterConfig::default().spec_for(1000);
    assert_eq!(period_millis(spec.step_interval()), 33);
}

#[test]
fn given_running_counter_when_rendered_each_step_then_text_never_exceeds_target() {
    let mut animation = CounterAnimation::start(CounterConfig::default().spec_for(55));
    let mut frames = vec![format_count(animation.value(), "+")];
    while let Some(value) = animation.advance() {
        assert!(value <= 55);
        frames.push(format_count(value, "+"));
    }

    assert_eq!(frames.first().map(String::as_str), Some("0+"));
    assert_eq!(frames.last().map(String::as_str), Some("55+"));
}

#[test]
fn given_zero_target_when_running_then_every_frame_shows_zero() {
    let mut animation = CounterAnimation::start(CounterConfig::default().spec_for(0));
    while let Some(value) = animation.advance() {
        assert_eq!(format_count(value, ""), "0");
    }
    assert!(animation.is_finished());
}
