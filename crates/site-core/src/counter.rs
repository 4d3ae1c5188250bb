//! Stepped number animation for headline statistics.
//!
//! A counter climbs from zero to its target in a fixed number of equal steps
//! spread over a fixed duration. Value at step `k` of `n` is
//! `min(floor(target * k / n), target)`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Reference animation length.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

/// Reference number of steps.
pub const DEFAULT_STEPS: u32 = 60;

/// Shape of one counter animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSpec {
    pub target: u32,
    #[serde(with = "millis")]
    pub duration: Duration,
    pub steps: u32,
}

impl CounterSpec {
    /// Counter for `target` with the reference duration and step count.
    #[must_use]
    pub const fn new(target: u32) -> Self {
        Self {
            target,
            duration: DEFAULT_DURATION,
            steps: DEFAULT_STEPS,
        }
    }

    #[must_use]
    pub const fn with_timing(self, duration: Duration, steps: u32) -> Self {
        Self {
            duration,
            steps,
            ..self
        }
    }

    /// Time between two steps (`duration / steps`).
    #[must_use]
    pub fn step_interval(&self) -> Duration {
        self.duration
            .checked_div(self.steps)
            .unwrap_or(Duration::ZERO)
    }

    /// Displayed value after `step` steps.
    #[must_use]
    pub fn value_at(&self, step: u32) -> u32 {
        if self.steps == 0 || step >= self.steps {
            return self.target;
        }
        let scaled = u64::from(self.target).saturating_mul(u64::from(step));
        let value = scaled.checked_div(u64::from(self.steps)).unwrap_or(0);
        u32::try_from(value).unwrap_or(self.target).min(self.target)
    }
}

/// A running counter animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAnimation {
    spec: CounterSpec,
    step: u32,
}

impl CounterAnimation {
    /// Start at zero.
    #[must_use]
    pub const fn start(spec: CounterSpec) -> Self {
        Self { spec, step: 0 }
    }

    #[must_use]
    pub const fn spec(&self) -> CounterSpec {
        self.spec
    }

    /// Value currently displayed.
    #[must_use]
    pub fn value(&self) -> u32 {
        if self.step == 0 && self.spec.steps > 0 {
            return 0;
        }
        self.spec.value_at(self.step)
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.step >= self.spec.steps
    }

    /// Take one step; returns the new value, or `None` once the animation
    /// has already reached its last step.
    pub fn advance(&mut self) -> Option<u32> {
        if self.is_finished() {
            return None;
        }
        self.step = self.step.saturating_add(1);
        Some(self.value())
    }

    /// Jump straight to the final value.
    pub const fn finish(&mut self) {
        self.step = self.spec.steps;
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
