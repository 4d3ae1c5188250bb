//! Auto-advancing, interaction-aware carousel.
//!
//! - `state`: pure index arithmetic and the derived render view
//! - `controller`: [`Carousel`], owning the autoplay interval
//! - `slide`: the immutable slide record
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use site_core::carousel::{Carousel, Slide};
//! use site_core::schedule::VirtualClock;
//!
//! let slides = vec![
//!     Slide::new("🔍", "Audit", "Audits with depth", "…", "Learn more", "#contact"),
//!     Slide::new("💼", "Tax", "Tax planning", "…", "Explore", "#contact"),
//! ];
//! let clock = VirtualClock::new();
//! let mut carousel = Carousel::mount(slides, Duration::from_millis(3000), clock.clone());
//!
//! clock.advance(Duration::from_millis(3000), |generation| {
//!     carousel.tick(generation);
//! });
//! assert_eq!(carousel.state().active_index, 1);
//! assert_eq!(carousel.view().transform(), "translateX(-100%)");
//! ```

pub mod controller;
pub mod slide;
pub mod state;

pub use controller::{Carousel, DEFAULT_INTERVAL};
pub use slide::Slide;
pub use state::{CarouselState, CarouselView};
