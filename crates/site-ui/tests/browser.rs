//! Browser integration tests
//!
//! Run with `wasm-pack test --headless --firefox crates/site-ui`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use site_core::reveal::Threshold;
use site_core::{Generation, Scheduler};
use site_ui::browser::{IntervalScheduler, ObserverGuard, scroll_to_section};
use site_ui::error::UiError;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn attached_div(id: &str) -> Result<web_sys::Element, UiError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(UiError::DocumentNotAvailable)?;
    let element = document
        .create_element("div")
        .map_err(|e| UiError::listener(&e))?;
    element.set_id(id);
    let body = document.body().ok_or(UiError::DocumentNotAvailable)?;
    body.append_child(&element)
        .map_err(|e| UiError::listener(&e))?;
    Ok(element)
}

#[wasm_bindgen_test]
fn given_unknown_section_when_scrolling_then_element_not_found() {
    let result = scroll_to_section("no-such-section", 80.0);
    assert_eq!(
        result,
        Err(UiError::ElementNotFound("no-such-section".to_string()))
    );
}

#[wasm_bindgen_test]
fn given_existing_section_when_scrolling_then_ok() -> Result<(), UiError> {
    attached_div("scroll-target")?;
    scroll_to_section("scroll-target", 80.0)
}

#[wasm_bindgen_test]
fn given_observer_when_unobserved_twice_then_idempotent() -> Result<(), UiError> {
    let element = attached_div("reveal-target")?;
    let guard = ObserverGuard::observe(&element, Threshold::SECTION_TITLE, |_| {})?;
    assert!(guard.is_observing());

    guard.unobserve();
    guard.unobserve();

    assert!(!guard.is_observing());
    Ok(())
}

#[wasm_bindgen_test]
async fn given_armed_interval_when_period_elapses_then_generation_reported() {
    let seen = Rc::new(Cell::new(None::<Generation>));
    let sink = Rc::clone(&seen);
    let mut scheduler = IntervalScheduler::new(move |generation| sink.set(Some(generation)));

    let handle = scheduler.start_interval(Duration::from_millis(10), Generation::FIRST);
    TimeoutFuture::new(50).await;
    drop(handle);

    assert_eq!(seen.get(), Some(Generation::FIRST));
}

#[wasm_bindgen_test]
async fn given_dropped_handle_when_period_elapses_then_no_tick() {
    let fired = Rc::new(Cell::new(0_u32));
    let sink = Rc::clone(&fired);
    let mut scheduler = IntervalScheduler::new(move |_| sink.set(sink.get() + 1));

    drop(scheduler.start_interval(Duration::from_millis(10), Generation::FIRST));
    TimeoutFuture::new(50).await;

    assert_eq!(fired.get(), 0);
}
