//! Slide records shown by the carousel.

use serde::{Deserialize, Serialize};

/// One immutable carousel slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub cta_label: String,
    /// In-page anchor the call to action scrolls to, e.g. `#contact`
    pub cta_target: String,
}

impl Slide {
    /// Build a slide from borrowed text.
    #[must_use]
    pub fn new(
        icon: &str,
        title: &str,
        subtitle: &str,
        description: &str,
        cta_label: &str,
        cta_target: &str,
    ) -> Self {
        Self {
            icon: icon.to_owned(),
            title: title.to_owned(),
            subtitle: subtitle.to_owned(),
            description: description.to_owned(),
            cta_label: cta_label.to_owned(),
            cta_target: cta_target.to_owned(),
        }
    }
}
