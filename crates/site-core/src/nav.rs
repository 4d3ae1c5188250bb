//! Scroll-driven navigation state for the fixed header.

use serde::{Deserialize, Serialize};

/// Height reserved for the fixed header when scrolling to a section.
pub const DEFAULT_HEADER_OFFSET: f64 = 80.0;
/// Scroll distance after which the header switches to its compact style.
pub const DEFAULT_SCROLLED_AFTER: f64 = 20.0;
/// Viewport line a section must straddle to become the active one.
pub const DEFAULT_ACTIVATION_LINE: f64 = 100.0;

/// One header link pointing at an in-page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub section_id: &'static str,
}

impl NavLink {
    /// Anchor form of the section id, e.g. `#services`.
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.section_id)
    }
}

/// Viewport-relative bounds of one section, as measured by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, bottom: f64) -> Self {
        Self {
            id: id.into(),
            top,
            bottom,
        }
    }

    fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Tunables for [`NavState`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavSettings {
    pub header_offset: f64,
    pub scrolled_after: f64,
    pub activation_line: f64,
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            header_offset: DEFAULT_HEADER_OFFSET,
            scrolled_after: DEFAULT_SCROLLED_AFTER,
            activation_line: DEFAULT_ACTIVATION_LINE,
        }
    }
}

/// Header state: mobile menu, compact style and highlighted section.
#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    settings: NavSettings,
    menu_open: bool,
    scrolled: bool,
    active_section: String,
}

impl NavState {
    /// Fresh header with `initial_section` highlighted.
    #[must_use]
    pub fn new(settings: NavSettings, initial_section: impl Into<String>) -> Self {
        Self {
            settings,
            menu_open: false,
            scrolled: false,
            active_section: initial_section.into(),
        }
    }

    #[must_use]
    pub const fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub const fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    #[must_use]
    pub fn active_section(&self) -> &str {
        &self.active_section
    }

    #[must_use]
    pub fn is_active(&self, section_id: &str) -> bool {
        self.active_section == section_id
    }

    #[must_use]
    pub const fn settings(&self) -> NavSettings {
        self.settings
    }

    pub const fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub const fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Update from a scroll event.
    ///
    /// `sections` must be in page order; the first one straddling the activation
    /// line wins. With no match the previous section stays active.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionBounds]) {
        self.scrolled = scroll_y > self.settings.scrolled_after;

        if let Some(section) = sections
            .iter()
            .find(|section| section.straddles(self.settings.activation_line))
        {
            if section.id != self.active_section {
                tracing::debug!(section = %section.id, "active section changed");
                self.active_section.clone_from(&section.id);
            }
        }
    }

    /// Document-relative scroll position for a section whose top is
    /// `element_top` in the viewport, leaving room for the header.
    #[must_use]
    pub fn scroll_target(&self, element_top: f64, page_offset: f64) -> f64 {
        scroll_target(element_top, page_offset, self.settings.header_offset)
    }
}

/// `element_top + page_offset - header_offset`.
#[must_use]
pub fn scroll_target(element_top: f64, page_offset: f64, header_offset: f64) -> f64 {
    element_top + page_offset - header_offset
}

/// Strip a leading `#` from an in-page anchor.
///
/// Returns `None` for the bare `#` anchor, which means "stay put".
#[must_use]
pub fn section_id_from_href(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#').unwrap_or(href);
    (!id.is_empty()).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> NavState {
        NavState::new(NavSettings::default(), "home")
    }

    #[test]
    fn test_scrolled_after_twenty_pixels() {
        let mut nav = state();
        nav.on_scroll(20.0, &[]);
        assert!(!nav.is_scrolled());
        nav.on_scroll(21.0, &[]);
        assert!(nav.is_scrolled());
    }

    #[test]
    fn test_first_straddling_section_becomes_active() {
        let mut nav = state();
        let sections = [
            SectionBounds::new("home", -900.0, -50.0),
            SectionBounds::new("services", -50.0, 700.0),
            SectionBounds::new("industries", 100.0, 900.0),
        ];

        nav.on_scroll(950.0, &sections);

        assert_eq!(nav.active_section(), "services");
        assert!(nav.is_active("services"));
    }

    #[test]
    fn test_no_match_keeps_previous_section() {
        let mut nav = state();
        nav.on_scroll(5000.0, &[SectionBounds::new("about", 400.0, 900.0)]);
        assert_eq!(nav.active_section(), "home");
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let mut nav = state();
        nav.toggle_menu();
        assert!(nav.is_menu_open());
        nav.close_menu();
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_scroll_target_subtracts_header() {
        let nav = state();
        let target = nav.scroll_target(300.0, 1200.0);
        assert!((target - 1420.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_section_id_from_href() {
        assert_eq!(section_id_from_href("#contact"), Some("contact"));
        assert_eq!(section_id_from_href("about"), Some("about"));
        assert_eq!(section_id_from_href("#"), None);
    }

    #[test]
    fn test_nav_link_href() {
        let link = NavLink {
            label: "Services",
            section_id: "services",
        };
        assert_eq!(link.href(), "#services");
    }
}
