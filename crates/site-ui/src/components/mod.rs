//! Reusable UI components and hooks.

pub mod carousel;
pub mod counter;
pub mod reveal;
pub mod scroll_link;
pub mod section_title;

pub use carousel::ServiceCarousel;
pub use counter::{AnimatedCounter, use_counter};
pub use reveal::use_reveal;
pub use scroll_link::{LinkVariant, ScrollLink};
pub use section_title::SectionTitle;
