//! Integration tests for driving the carousel from a tokio host loop.
//!
//! Time is paused, so intervals complete as soon as the runtime is idle.

#![cfg(feature = "tokio")]

use std::time::Duration;

use site_core::carousel::{Carousel, DEFAULT_INTERVAL};
use site_core::content::service_slides;
use site_core::schedule::{Generation, TokioScheduler};
use tokio::sync::mpsc::Receiver;

/// Deliver the next `count` ticks to the carousel.
async fn pump(carousel: &mut Carousel<TokioScheduler>, ticks: &mut Receiver<Generation>, count: usize) {
    for _ in 0..count {
        let Some(generation) = ticks.recv().await else {
            return;
        };
        carousel.tick(generation);
    }
}

#[tokio::test(start_paused = true)]
async fn test_autoplay_advances_three_times() {
    let (scheduler, mut ticks) = TokioScheduler::channel();
    let mut carousel = Carousel::mount(service_slides(), DEFAULT_INTERVAL, scheduler);

    pump(&mut carousel, &mut ticks, 3).await;

    assert_eq!(carousel.state().active_index, 3);
}

#[tokio::test(start_paused = true)]
async fn test_queued_tick_loses_to_manual_navigation() {
    let (scheduler, mut ticks) = TokioScheduler::channel();
    let mut carousel = Carousel::mount(service_slides(), DEFAULT_INTERVAL, scheduler);

    // Let a tick land in the channel without consuming it.
    tokio::time::sleep(DEFAULT_INTERVAL + Duration::from_millis(10)).await;
    carousel.next();

    let queued = ticks.try_recv().ok();
    let applied = queued.is_some_and(|generation| carousel.tick(generation));

    assert!(queued.is_some());
    assert!(!applied);
    assert_eq!(carousel.state().active_index, 1);
}

#[tokio::test(start_paused = true)]
async fn test_manual_navigation_silences_timer() {
    let (scheduler, mut ticks) = TokioScheduler::channel();
    let mut carousel = Carousel::mount(service_slides(), DEFAULT_INTERVAL, scheduler);

    carousel.next();
    let waited = tokio::time::timeout(Duration::from_secs(60), ticks.recv()).await;

    assert!(waited.is_err());
    assert_eq!(carousel.state().active_index, 1);
}

#[tokio::test(start_paused = true)]
async fn test_hover_pauses_and_unhover_resumes() {
    let (scheduler, mut ticks) = TokioScheduler::channel();
    let mut carousel = Carousel::mount(service_slides(), DEFAULT_INTERVAL, scheduler);

    carousel.set_interacting(true);
    let waited = tokio::time::timeout(Duration::from_millis(5000), ticks.recv()).await;
    assert!(waited.is_err());

    carousel.set_interacting(false);
    let started = tokio::time::Instant::now();
    pump(&mut carousel, &mut ticks, 1).await;

    assert_eq!(carousel.state().active_index, 1);
    assert!(started.elapsed() >= DEFAULT_INTERVAL);
}
