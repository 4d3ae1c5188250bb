//! Tokio-backed scheduler for native hosts.
//!
//! Each interval runs as a spawned task that pushes its generation into a
//! capacity-1 channel. `try_send` drops a tick when one is already waiting, so
//! a slow consumer sees at most one pending tick rather than a backlog.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use super::{Generation, Scheduler};

/// Scheduler that spawns one tokio task per interval.
///
/// Must be used from within a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    ticks: mpsc::Sender<Generation>,
}

/// Handle for a running tokio interval; dropping it aborts the task.
#[derive(Debug)]
pub struct TokioTimerHandle {
    task: JoinHandle<()>,
}

impl Drop for TokioTimerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl TokioScheduler {
    /// Create a scheduler and the receiver its ticks are delivered to.
    ///
    /// The host loop feeds every received generation back into the state
    /// machine that armed the interval.
    #[must_use]
    pub fn channel() -> (Self, mpsc::Receiver<Generation>) {
        let (ticks, rx) = mpsc::channel(1);
        (Self { ticks }, rx)
    }
}

impl Scheduler for TokioScheduler {
    type Handle = TokioTimerHandle;

    fn start_interval(&mut self, period: Duration, generation: Generation) -> Self::Handle {
        let ticks = self.ticks.clone();
        let period = period.max(Duration::from_millis(1));

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                match ticks.try_send(generation) {
                    Ok(()) | Err(mpsc::error::TrySendError::Full(_)) => {}
                    Err(mpsc::error::TrySendError::Closed(_)) => break,
                }
            }
        });

        tracing::trace!(%generation, ?period, "tokio interval spawned");
        TokioTimerHandle { task }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_interval_delivers_generation() {
        let (mut scheduler, mut rx) = TokioScheduler::channel();
        let _handle = scheduler.start_interval(Duration::from_millis(3000), Generation::FIRST);

        let started = Instant::now();
        let generation = rx.recv().await.expect("tick");

        assert_eq!(generation, Generation::FIRST);
        assert!(started.elapsed() >= Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_handle_stops_ticks() {
        let (mut scheduler, mut rx) = TokioScheduler::channel();
        let handle = scheduler.start_interval(Duration::from_millis(100), Generation::FIRST);
        drop(handle);

        let waited = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(waited.is_err(), "no tick expected after cancellation");
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_consumer_sees_one_pending_tick() {
        let (mut scheduler, mut rx) = TokioScheduler::channel();
        let handle = scheduler.start_interval(Duration::from_millis(100), Generation::FIRST);

        tokio::time::sleep(Duration::from_millis(1050)).await;
        drop(handle);
        tokio::task::yield_now().await;

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }
}
