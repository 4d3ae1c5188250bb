//! Deterministic scheduler driven by explicit time advancement.
//!
//! `VirtualClock` is cheap to clone; all clones share one timeline. The owner
//! of a state machine hands one clone to the machine as its [`Scheduler`] and
//! keeps another to move time forward with [`VirtualClock::advance`].

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::{Generation, Scheduler};

/// Shortest period the clock will schedule; a zero period would never let
/// time move past the first tick.
const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug)]
struct VirtualTimer {
    generation: Generation,
    period: Duration,
    due: Duration,
}

#[derive(Debug, Default)]
struct ClockInner {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<u64, VirtualTimer>,
}

impl ClockInner {
    /// Pops the earliest tick due at or before `horizon`, rescheduling its timer.
    fn fire_next(&mut self, horizon: Duration) -> Option<Generation> {
        let (_, timer) = self
            .timers
            .iter_mut()
            .filter(|(_, timer)| timer.due <= horizon)
            .min_by_key(|(id, timer)| (timer.due, **id))?;

        self.now = timer.due;
        timer.due = timer.due.saturating_add(timer.period);
        Some(timer.generation)
    }
}

/// Manually advanced clock implementing [`Scheduler`].
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    inner: Rc<RefCell<ClockInner>>,
}

/// Handle for an interval on a [`VirtualClock`]; dropping it removes the timer.
#[derive(Debug)]
pub struct VirtualTimerHandle {
    id: u64,
    clock: Weak<RefCell<ClockInner>>,
}

impl Drop for VirtualTimerHandle {
    fn drop(&mut self) {
        if let Some(inner) = self.clock.upgrade() {
            inner.borrow_mut().timers.remove(&self.id);
        }
    }
}

impl VirtualClock {
    /// Create a clock at time zero with no timers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Number of intervals currently scheduled.
    #[must_use]
    pub fn live_timers(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    /// Move time forward by `by`, calling `on_fire` for every tick that falls
    /// due, in order.
    ///
    /// The clock is not borrowed while `on_fire` runs, so the callback may
    /// start or drop timers; timers dropped by the callback never fire again.
    /// Returns the number of ticks delivered.
    pub fn advance<F>(&self, by: Duration, mut on_fire: F) -> usize
    where
        F: FnMut(Generation),
    {
        let horizon = self.now().saturating_add(by);
        let mut fired = 0_usize;

        loop {
            let next = self.inner.borrow_mut().fire_next(horizon);
            match next {
                Some(generation) => {
                    fired = fired.saturating_add(1);
                    on_fire(generation);
                }
                None => break,
            }
        }

        self.inner.borrow_mut().now = horizon;
        fired
    }
}

impl Scheduler for VirtualClock {
    type Handle = VirtualTimerHandle;

    fn start_interval(&mut self, period: Duration, generation: Generation) -> Self::Handle {
        let mut inner = self.inner.borrow_mut();
        let period = period.max(MIN_PERIOD);
        let id = inner.next_id;
        inner.next_id = inner.next_id.wrapping_add(1);

        let due = inner.now.saturating_add(period);
        inner.timers.insert(
            id,
            VirtualTimer {
                generation,
                period,
                due,
            },
        );

        VirtualTimerHandle {
            id,
            clock: Rc::downgrade(&self.inner),
        }
    }
}
