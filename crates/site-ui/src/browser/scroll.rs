//! Window scroll helpers: smooth in-page scrolling and a scroll listener.

use site_core::nav::{self, SectionBounds};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

use crate::error::{Result, UiError};

fn window() -> Result<Window> {
    web_sys::window().ok_or(UiError::WindowNotAvailable)
}

/// Current vertical scroll offset of the page.
///
/// # Errors
///
/// Returns an error outside a browser or if the offset cannot be read.
pub fn scroll_y() -> Result<f64> {
    window()?
        .scroll_y()
        .map_err(|e| UiError::ScrollFailed(format!("{e:?}")))
}

/// Smooth-scroll so the section with `section_id` sits just below the header.
///
/// # Errors
///
/// Returns [`UiError::ElementNotFound`] when no element has that id; the page
/// does not move in that case.
pub fn scroll_to_section(section_id: &str, header_offset: f64) -> Result<()> {
    let window = window()?;
    let document = window.document().ok_or(UiError::DocumentNotAvailable)?;
    let element = document
        .get_element_by_id(section_id)
        .ok_or_else(|| UiError::ElementNotFound(section_id.to_string()))?;

    let page_offset = window
        .page_y_offset()
        .map_err(|e| UiError::ScrollFailed(format!("{e:?}")))?;
    let top = nav::scroll_target(
        element.get_bounding_client_rect().top(),
        page_offset,
        header_offset,
    );

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    tracing::debug!(section = section_id, top, "scrolling to section");
    Ok(())
}

/// Viewport bounds of each section that exists in the document, in the
/// order given. Missing ids are skipped.
#[must_use]
pub fn measure_sections(ids: &[&str]) -> Vec<SectionBounds> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    ids.iter()
        .filter_map(|id| {
            let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
            Some(SectionBounds::new(*id, rect.top(), rect.bottom()))
        })
        .collect()
}

/// Window `scroll` listener; removed when dropped.
pub struct ScrollListener {
    window: Window,
    closure: Closure<dyn FnMut()>,
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("scroll", self.closure.as_ref().unchecked_ref())
        {
            tracing::warn!(error = %UiError::listener(&e), "failed to remove scroll listener");
        }
    }
}

/// Call `on_scroll` on every window scroll event.
///
/// # Errors
///
/// Returns an error outside a browser or if the listener is rejected.
pub fn attach_scroll_listener<F>(on_scroll: F) -> Result<ScrollListener>
where
    F: FnMut() + 'static,
{
    let window = window()?;
    let closure = Closure::wrap(Box::new(on_scroll) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
        .map_err(|e| UiError::listener(&e))?;
    Ok(ScrollListener { window, closure })
}
