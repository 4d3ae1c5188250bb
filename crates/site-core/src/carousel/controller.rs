//! Carousel controller: index, autoplay timer and interaction policy.
//!
//! The controller owns at most one armed interval. Any change that affects
//! autoplay eligibility goes through one re-sync step, which drops the
//! current handle and, if still eligible, arms a fresh one. Ticks carry the
//! generation of the interval that produced them; only the armed generation
//! may advance the carousel.

use std::time::Duration;

use tracing::{debug, trace};

use super::slide::Slide;
use super::state::{CarouselState, CarouselView};
use crate::schedule::{Generation, Scheduler};

/// Reference autoplay interval.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3000);

struct ArmedTimer<H> {
    generation: Generation,
    _handle: H,
}

/// Auto-advancing, interaction-aware carousel.
pub struct Carousel<S: Scheduler> {
    slides: Vec<Slide>,
    state: CarouselState,
    interacting: bool,
    interval: Duration,
    scheduler: S,
    timer: Option<ArmedTimer<S::Handle>>,
    last_generation: Generation,
}

impl<S: Scheduler> std::fmt::Debug for Carousel<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("slides", &self.slides.len())
            .field("state", &self.state)
            .field("interacting", &self.interacting)
            .field("interval", &self.interval)
            .field("armed", &self.armed_generation())
            .finish_non_exhaustive()
    }
}

impl<S: Scheduler> Carousel<S> {
    /// Mount a carousel over `slides`, arming autoplay when there is more
    /// than one slide.
    pub fn mount(slides: Vec<Slide>, interval: Duration, scheduler: S) -> Self {
        let mut carousel = Self {
            slides,
            state: CarouselState::initial(),
            interacting: false,
            interval,
            scheduler,
            timer: None,
            last_generation: Generation::default(),
        };
        debug!(slides = carousel.len(), ?interval, "carousel mounted");
        carousel.sync_timer();
        carousel
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the carousel has no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[must_use]
    pub const fn state(&self) -> CarouselState {
        self.state
    }

    #[must_use]
    pub const fn is_interacting(&self) -> bool {
        self.interacting
    }

    /// The slide currently shown, if any.
    #[must_use]
    pub fn active_slide(&self) -> Option<&Slide> {
        self.slides.get(self.state.active_index)
    }

    /// Render view for the current state.
    #[must_use]
    pub fn view(&self) -> CarouselView {
        CarouselView::derive(self.state, self.len())
    }

    /// Whether an autoplay interval is currently live.
    #[must_use]
    pub const fn is_timer_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Generation of the live interval, if any.
    #[must_use]
    pub fn armed_generation(&self) -> Option<Generation> {
        self.timer.as_ref().map(|timer| timer.generation)
    }

    /// Show the next slide and stop autoplay.
    pub fn next(&mut self) {
        self.navigate(self.state.advanced(self.len()));
    }

    /// Show the previous slide and stop autoplay.
    pub fn previous(&mut self) {
        self.navigate(self.state.retreated(self.len()));
    }

    /// Show slide `index` (clamped to the last slide) and stop autoplay.
    pub fn go_to(&mut self, index: usize) {
        if index >= self.len() {
            trace!(index, len = self.len(), "go_to index clamped");
        }
        self.navigate(self.state.jumped(index, self.len()));
    }

    /// Pause autoplay while the user hovers or touches the carousel.
    ///
    /// Leaving interaction re-arms a full interval only if autoplay has not
    /// been switched off by manual navigation.
    pub fn set_interacting(&mut self, active: bool) {
        if self.interacting == active {
            return;
        }
        self.interacting = active;
        debug!(interacting = active, "carousel interaction changed");
        self.sync_timer();
    }

    /// Apply one autoplay tick from the interval tagged `generation`.
    ///
    /// Returns `false` and leaves the state untouched for stale or foreign
    /// generations.
    pub fn tick(&mut self, generation: Generation) -> bool {
        if self.armed_generation() != Some(generation) {
            trace!(%generation, "stale carousel tick ignored");
            return false;
        }
        self.state = self.state.advanced(self.len());
        debug!(index = self.state.active_index, "carousel autoplay advanced");
        true
    }

    /// Release the timer and drop the carousel.
    pub fn unmount(self) {
        debug!("carousel unmounted");
    }

    fn navigate(&mut self, target: CarouselState) {
        self.state = target.without_autoplay();
        debug!(index = self.state.active_index, "carousel navigated");
        self.sync_timer();
    }

    fn autoplay_eligible(&self) -> bool {
        self.state.autoplay_enabled && !self.interacting && self.slides.len() > 1
    }

    /// Tear down the live interval and re-arm it when still eligible.
    fn sync_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            trace!(generation = %timer.generation, "carousel timer released");
        }

        if self.autoplay_eligible() {
            let generation = self.last_generation.next();
            self.last_generation = generation;
            let handle = self.scheduler.start_interval(self.interval, generation);
            trace!(%generation, "carousel timer armed");
            self.timer = Some(ArmedTimer {
                generation,
                _handle: handle,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;
    use crate::schedule::VirtualClock;

    fn slides(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| {
                Slide::new(
                    "•",
                    &format!("Service {i}"),
                    "subtitle",
                    "description",
                    "Learn more",
                    "#contact",
                )
            })
            .collect()
    }

    fn mounted(n: usize) -> (Carousel<VirtualClock>, VirtualClock) {
        let clock = VirtualClock::new();
        let carousel = Carousel::mount(slides(n), DEFAULT_INTERVAL, clock.clone());
        (carousel, clock)
    }

    #[test]
    fn test_mount_arms_single_timer() {
        let (carousel, clock) = mounted(6);
        assert!(carousel.is_timer_armed());
        assert_eq!(clock.live_timers(), 1);
        assert_eq!(carousel.state(), CarouselState::initial());
    }

    #[test]
    fn test_manual_navigation_disarms() {
        let (mut carousel, clock) = mounted(6);
        carousel.next();

        assert!(!carousel.is_timer_armed());
        assert_eq!(clock.live_timers(), 0);
        assert!(!carousel.state().autoplay_enabled);
    }

    #[test]
    fn test_previous_from_first_wraps() {
        let (mut carousel, _clock) = mounted(6);
        carousel.previous();
        assert_eq!(carousel.state().active_index, 5);
    }

    #[test]
    fn test_go_to_out_of_range_clamps() {
        let (mut carousel, _clock) = mounted(6);
        carousel.go_to(42);
        assert_eq!(carousel.state().active_index, 5);
        assert!(!carousel.state().autoplay_enabled);
    }

    #[test]
    fn test_stale_generation_is_ignored() {
        let (mut carousel, _clock) = mounted(6);
        let stale = carousel.armed_generation().expect("armed");
        carousel.set_interacting(true);
        carousel.set_interacting(false);

        assert!(!carousel.tick(stale));
        assert_eq!(carousel.state().active_index, 0);
    }

    #[test]
    fn test_interaction_toggle_rearms_without_stacking() {
        let (mut carousel, clock) = mounted(6);
        for _ in 0..5 {
            carousel.set_interacting(true);
            assert_eq!(clock.live_timers(), 0);
            carousel.set_interacting(false);
            assert_eq!(clock.live_timers(), 1);
        }
    }

    #[test]
    fn test_repeated_same_interaction_keeps_timer() {
        let (mut carousel, _clock) = mounted(6);
        let armed = carousel.armed_generation();
        carousel.set_interacting(false);
        assert_eq!(carousel.armed_generation(), armed);
    }

    #[test]
    fn test_empty_carousel_never_arms() {
        let (mut carousel, clock) = mounted(0);
        assert!(!carousel.is_timer_armed());
        assert!(carousel.view().is_empty());
        assert!(carousel.active_slide().is_none());

        carousel.next();
        carousel.previous();
        carousel.go_to(3);
        carousel.set_interacting(true);
        carousel.set_interacting(false);

        assert_eq!(clock.live_timers(), 0);
        assert_eq!(carousel.state().active_index, 0);
    }

    #[test]
    fn test_unmount_releases_timer() {
        let (carousel, clock) = mounted(6);
        assert_eq!(clock.live_timers(), 1);
        carousel.unmount();
        assert_eq!(clock.live_timers(), 0);
    }

    #[test]
    fn test_active_slide_follows_index() {
        let (mut carousel, _clock) = mounted(3);
        carousel.go_to(1);
        assert_eq!(
            carousel.active_slide().map(|s| s.title.as_str()),
            Some("Service 1")
        );
    }
}
