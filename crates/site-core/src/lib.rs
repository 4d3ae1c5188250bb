//! Platform-independent state machines for the KCMP & Associates site.
//!
//! Nothing in this crate touches the DOM or a real clock. Browser and native
//! hosts drive the machines through the [`schedule::Scheduler`] seam and feed
//! them viewport and scroll measurements.
//!
//! ## Module Structure
//! - `carousel`: auto-advancing, interaction-aware services carousel
//! - `schedule`: interval scheduling seam, virtual clock and tokio backend
//! - `counter`: stepped statistic counters
//! - `reveal`: one-shot fade-in latch
//! - `nav`: header scroll state and scroll targets
//! - `contact`: contact form values
//! - `content`: static page copy
//! - `config`: TOML configuration
//! - `error` / `result`: error type and Result alias

#![forbid(unsafe_code)]

pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod counter;
pub mod error;
pub mod nav;
pub mod result;
pub mod reveal;
pub mod schedule;

pub use carousel::{Carousel, CarouselState, CarouselView, Slide};
pub use config::SiteConfig;
pub use error::Error;
pub use result::{Result, ResultExt};
pub use schedule::{Generation, Scheduler, VirtualClock};
