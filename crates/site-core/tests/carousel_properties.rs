//! Property-based tests for carousel index arithmetic using proptest.
//!
//! Properties verified:
//! - Wrap-around: any sequence of navigation keeps the index in range
//! - Inverse: previous after next returns to the starting slide
//! - Jump exactness: go_to(k) lands on k and switches autoplay off

use std::time::Duration;

use proptest::prelude::*;
use site_core::carousel::{Carousel, Slide};
use site_core::schedule::VirtualClock;

const INTERVAL: Duration = Duration::from_millis(3000);

fn slides(n: usize) -> Vec<Slide> {
    (0..n)
        .map(|i| Slide::new("•", &format!("Slide {i}"), "", "", "Learn more", "#contact"))
        .collect()
}

#[derive(Debug, Clone)]
enum Op {
    Next,
    Previous,
    GoTo(usize),
    Interact(bool),
    Wait(u64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Next),
        Just(Op::Previous),
        (0usize..20).prop_map(Op::GoTo),
        any::<bool>().prop_map(Op::Interact),
        (0u64..10_000).prop_map(Op::Wait),
    ]
}

// ==========================================================================
// PROPERTY: Wrap-around
// ==========================================================================

proptest! {
    #[test]
    fn prop_next_sequence_stays_in_range(n in 1usize..12, presses in 0usize..50) {
        let clock = VirtualClock::new();
        let mut carousel = Carousel::mount(slides(n), INTERVAL, clock);

        for _ in 0..presses {
            carousel.next();
            prop_assert!(carousel.state().active_index < n);
        }
        prop_assert_eq!(carousel.state().active_index, presses % n);
    }

    #[test]
    fn prop_any_operation_sequence_stays_in_range(
        n in 1usize..12,
        ops in prop::collection::vec(op(), 0..40),
    ) {
        let clock = VirtualClock::new();
        let mut carousel = Carousel::mount(slides(n), INTERVAL, clock.clone());

        for op in ops {
            match op {
                Op::Next => carousel.next(),
                Op::Previous => carousel.previous(),
                Op::GoTo(index) => carousel.go_to(index),
                Op::Interact(active) => carousel.set_interacting(active),
                Op::Wait(ms) => {
                    clock.advance(Duration::from_millis(ms), |generation| {
                        carousel.tick(generation);
                    });
                }
            }
            prop_assert!(carousel.state().active_index < n);
            prop_assert!(clock.live_timers() <= 1, "timers must never stack");
            prop_assert_eq!(carousel.view().indicators.iter().filter(|on| **on).count(), 1);
        }
    }
}

// ==========================================================================
// PROPERTY: Inverse and jump exactness
// ==========================================================================

proptest! {
    #[test]
    fn prop_previous_undoes_next(n in 2usize..12, start in 0usize..12) {
        let start = start % n;
        let clock = VirtualClock::new();
        let mut carousel = Carousel::mount(slides(n), INTERVAL, clock);
        carousel.go_to(start);

        carousel.next();
        carousel.previous();

        prop_assert_eq!(carousel.state().active_index, start);
    }

    #[test]
    fn prop_go_to_is_exact(n in 1usize..12, k in 0usize..12) {
        let k = k % n;
        let clock = VirtualClock::new();
        let mut carousel = Carousel::mount(slides(n), INTERVAL, clock.clone());

        carousel.go_to(k);

        prop_assert_eq!(carousel.state().active_index, k);
        prop_assert!(!carousel.state().autoplay_enabled);
        prop_assert_eq!(clock.live_timers(), 0);
        let expected_offset = -i64::try_from(k).unwrap_or(0) * 100;
        prop_assert_eq!(carousel.view().offset_percent, expected_offset);
    }
}
