//! Behavioral tests for carousel autoplay and interaction
//!
//! Given-when-then scenarios driven by a virtual clock, so elapsed time is
//! exact and the tests never sleep.

use std::time::Duration;

use site_core::carousel::{Carousel, DEFAULT_INTERVAL, Slide};
use site_core::content::service_slides;
use site_core::schedule::VirtualClock;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn mount(slides: Vec<Slide>) -> (Carousel<VirtualClock>, VirtualClock) {
    let clock = VirtualClock::new();
    let carousel = Carousel::mount(slides, DEFAULT_INTERVAL, clock.clone());
    (carousel, clock)
}

/// Advance the clock, feeding every tick into the carousel.
fn wait(carousel: &mut Carousel<VirtualClock>, clock: &VirtualClock, by: Duration) {
    clock.advance(by, |generation| {
        carousel.tick(generation);
    });
}

// ============================================================================
// AUTOPLAY BEHAVIORS
// ============================================================================

#[test]
fn given_six_slides_when_three_intervals_elapse_then_index_is_three() {
    let (mut carousel, clock) = mount(service_slides());

    let mut seen = vec![carousel.state().active_index];
    for _ in 0..3 {
        wait(&mut carousel, &clock, ms(3000));
        seen.push(carousel.state().active_index);
    }

    assert_eq!(seen, vec![0, 1, 2, 3]);
    assert!(carousel.state().autoplay_enabled);
}

#[test]
fn given_six_slides_when_autoplay_passes_last_then_wraps_to_first() {
    let (mut carousel, clock) = mount(service_slides());

    wait(&mut carousel, &clock, ms(6 * 3000));

    assert_eq!(carousel.state().active_index, 0);
}

#[test]
fn given_autoplay_when_less_than_interval_elapses_then_no_advance() {
    let (mut carousel, clock) = mount(service_slides());

    wait(&mut carousel, &clock, ms(2999));

    assert_eq!(carousel.state().active_index, 0);
}

// ============================================================================
// MANUAL NAVIGATION BEHAVIORS
// ============================================================================

#[test]
fn given_user_presses_next_when_idle_forever_then_index_stays() {
    let (mut carousel, clock) = mount(service_slides());

    carousel.next();
    assert_eq!(carousel.state().active_index, 1);

    wait(&mut carousel, &clock, ms(60_000));

    assert_eq!(carousel.state().active_index, 1);
    assert!(!carousel.state().autoplay_enabled);
    assert_eq!(clock.live_timers(), 0);
}

#[test]
fn given_manual_navigation_when_hover_ends_then_autoplay_stays_off() {
    let (mut carousel, clock) = mount(service_slides());

    carousel.go_to(4);
    carousel.set_interacting(true);
    carousel.set_interacting(false);
    wait(&mut carousel, &clock, ms(30_000));

    assert_eq!(carousel.state().active_index, 4);
    assert!(!carousel.is_timer_armed());
}

#[test]
fn given_tick_already_due_when_user_navigates_first_then_manual_result_wins() {
    let (mut carousel, clock) = mount(service_slides());
    let pending = carousel.armed_generation();

    carousel.previous();
    let applied = pending.is_some_and(|generation| carousel.tick(generation));
    wait(&mut carousel, &clock, ms(3000));

    assert!(!applied);
    assert_eq!(carousel.state().active_index, 5);
}

// ============================================================================
// INTERACTION BEHAVIORS
// ============================================================================

#[test]
fn given_hover_at_index_two_when_unhovered_after_5s_then_waits_full_interval() {
    let (mut carousel, clock) = mount(service_slides());
    wait(&mut carousel, &clock, ms(6000));
    assert_eq!(carousel.state().active_index, 2);

    carousel.set_interacting(true);
    wait(&mut carousel, &clock, ms(5000));
    assert_eq!(carousel.state().active_index, 2);

    carousel.set_interacting(false);
    assert_eq!(carousel.state().active_index, 2);

    wait(&mut carousel, &clock, ms(2999));
    assert_eq!(carousel.state().active_index, 2);

    wait(&mut carousel, &clock, ms(1));
    assert_eq!(carousel.state().active_index, 3);
}

#[test]
fn given_hover_when_time_passes_then_no_timer_is_live() {
    let (mut carousel, clock) = mount(service_slides());

    carousel.set_interacting(true);
    wait(&mut carousel, &clock, ms(120_000));

    assert_eq!(carousel.state().active_index, 0);
    assert_eq!(clock.live_timers(), 0);
    assert!(carousel.state().autoplay_enabled);
}

#[test]
fn given_hover_mid_interval_when_unhovered_then_partial_progress_is_discarded() {
    let (mut carousel, clock) = mount(service_slides());

    wait(&mut carousel, &clock, ms(2500));
    carousel.set_interacting(true);
    carousel.set_interacting(false);
    wait(&mut carousel, &clock, ms(2500));

    assert_eq!(carousel.state().active_index, 0);
}

// ============================================================================
// EDGE CASES
// ============================================================================

#[test]
fn given_single_slide_when_navigating_and_waiting_then_index_stays_zero() {
    let slide = Slide::new("🔍", "Audit", "Audits", "…", "Learn more", "#contact");
    let (mut carousel, clock) = mount(vec![slide]);

    assert!(!carousel.is_timer_armed());
    carousel.set_interacting(true);
    carousel.set_interacting(false);
    assert_eq!(clock.live_timers(), 0);

    carousel.next();
    carousel.previous();
    carousel.go_to(0);
    wait(&mut carousel, &clock, ms(30_000));

    assert_eq!(carousel.state().active_index, 0);
    assert_eq!(clock.live_timers(), 0);
}

#[test]
fn given_no_slides_when_mounted_then_renders_nothing() {
    let (carousel, clock) = mount(Vec::new());

    assert!(carousel.view().is_empty());
    assert_eq!(clock.live_timers(), 0);
}

#[test]
fn given_two_instances_when_one_is_navigated_then_other_keeps_playing() {
    let (mut first, first_clock) = mount(service_slides());
    let (mut second, second_clock) = mount(service_slides());

    first.next();
    wait(&mut first, &first_clock, ms(3000));
    wait(&mut second, &second_clock, ms(3000));

    assert_eq!(first.state().active_index, 1);
    assert_eq!(second.state().active_index, 1);
    assert!(!first.state().autoplay_enabled);
    assert!(second.state().autoplay_enabled);
}

#[test]
fn given_mounted_carousel_when_dropped_then_timer_released() {
    let clock = VirtualClock::new();
    {
        let _carousel = Carousel::mount(service_slides(), DEFAULT_INTERVAL, clock.clone());
        assert_eq!(clock.live_timers(), 1);
    }
    assert_eq!(clock.live_timers(), 0);
}
