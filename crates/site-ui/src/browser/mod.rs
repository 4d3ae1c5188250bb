//! Thin RAII wrappers over browser APIs.
//!
//! Each handle owns its JS closure and releases the underlying registration
//! on drop, so a component only has to drop the handle in `on_cleanup`.

pub mod interval;
pub mod observer;
pub mod scroll;

pub use interval::IntervalScheduler;
pub use observer::ObserverGuard;
pub use scroll::{ScrollListener, attach_scroll_listener, scroll_to_section};
