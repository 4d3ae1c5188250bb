//! One-element `IntersectionObserver` guard.

use std::cell::Cell;

use site_core::reveal::Threshold;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::{Result, UiError};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Observes a single element until dropped.
///
/// `unobserve` is idempotent and dropping the guard disconnects the observer,
/// so an unmounted section never receives another callback.
pub struct ObserverGuard {
    observer: IntersectionObserver,
    target: Element,
    observing: Cell<bool>,
    _callback: ObserverCallback,
}

impl ObserverGuard {
    /// Start observing `target`, reporting `isIntersecting` for every entry.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::ObserverFailed`] if the browser rejects the observer.
    pub fn observe<F>(target: &Element, threshold: Threshold, mut on_change: F) -> Result<Self>
    where
        F: FnMut(bool) + 'static,
    {
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_change(entry.is_intersecting());
                }
            },
        ));

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold.get()));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| UiError::ObserverFailed(format!("{e:?}")))?;
        observer.observe(target);

        Ok(Self {
            observer,
            target: target.clone(),
            observing: Cell::new(true),
            _callback: callback,
        })
    }

    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.observing.get()
    }

    /// Stop watching the element. Safe to call more than once.
    pub fn unobserve(&self) {
        if self.observing.replace(false) {
            self.observer.unobserve(&self.target);
        }
    }
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.unobserve();
        self.observer.disconnect();
    }
}
