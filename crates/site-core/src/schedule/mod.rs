//! Interval scheduling seam between state machines and their host.
//!
//! State machines never own a clock. They ask a [`Scheduler`] to start an
//! interval and keep the returned handle; dropping the handle cancels the
//! interval. Every interval is tagged with a [`Generation`] so a tick that was
//! already queued when its timer was torn down can be recognised and ignored.
//!
//! Hosts:
//! - [`VirtualClock`]: deterministic, manually advanced time
//! - [`TokioScheduler`]: native tokio tasks (feature `tokio`)
//! - `site-ui` provides a browser scheduler built on `gloo-timers`

use std::fmt;
use std::time::Duration;

pub mod virtual_clock;

#[cfg(feature = "tokio")]
pub mod tokio_interval;

pub use virtual_clock::{VirtualClock, VirtualTimerHandle};

#[cfg(feature = "tokio")]
pub use tokio_interval::{TokioScheduler, TokioTimerHandle};

/// Identity of one armed interval.
///
/// Generations only grow; a tick carrying an older generation than the
/// currently armed timer is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Generation(u64);

impl Generation {
    /// The first generation handed out by a fresh owner.
    pub const FIRST: Self = Self(1);

    /// Generation following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Raw counter value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gen#{}", self.0)
    }
}

/// Something that can run a recurring interval.
///
/// Implementations deliver each tick back to the owner together with the
/// generation passed to [`Scheduler::start_interval`]. The interval lives
/// exactly as long as the returned handle.
pub trait Scheduler {
    /// Guard for a running interval; dropping it cancels the interval.
    type Handle;

    /// Start an interval firing every `period`, the first tick one full
    /// `period` from now.
    fn start_interval(&mut self, period: Duration, generation: Generation) -> Self::Handle;
}
