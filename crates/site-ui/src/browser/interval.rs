//! `setInterval` backed scheduler for the carousel.

use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Interval;
use site_core::{Generation, Scheduler};

/// Arms one `gloo` [`Interval`] per call; dropping the returned handle clears it.
///
/// Every firing reports the generation it was armed with, so the controller
/// can discard ticks from a timer it has already replaced.
#[derive(Clone)]
pub struct IntervalScheduler {
    on_tick: Rc<dyn Fn(Generation)>,
}

impl IntervalScheduler {
    pub fn new(on_tick: impl Fn(Generation) + 'static) -> Self {
        Self {
            on_tick: Rc::new(on_tick),
        }
    }
}

impl std::fmt::Debug for IntervalScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntervalScheduler").finish_non_exhaustive()
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn start_interval(&mut self, period: Duration, generation: Generation) -> Self::Handle {
        let on_tick = Rc::clone(&self.on_tick);
        tracing::trace!(%generation, period_ms = period.as_millis(), "arming interval");
        Interval::new(period_millis(period), move || on_tick(generation))
    }
}

/// Period in whole milliseconds, at least 1 and saturating at `u32::MAX`.
#[must_use]
pub fn period_millis(period: Duration) -> u32 {
    u32::try_from(period.as_millis()).unwrap_or(u32::MAX).max(1)
}
