//! One-shot fade-in latch driven by viewport intersection.
//!
//! Sections start hidden and reveal the first time the host reports them
//! intersecting the viewport at or above their threshold. Leaving the
//! viewport afterwards never hides them again.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// Visible fraction of an element required to count as intersecting.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Threshold(f64);

impl Threshold {
    pub const SECTION_TITLE: Self = Self(0.2);
    pub const SERVICES: Self = Self(0.1);
    pub const INDUSTRIES: Self = Self(0.1);
    pub const ABOUT_REASONS: Self = Self(0.3);
    pub const STATS: Self = Self(0.3);
    pub const CONTACT: Self = Self(0.2);

    /// Validate a ratio in `0.0..=1.0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ThresholdOutOfRange`] for values outside the range or NaN.
    pub fn new(value: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::ThresholdOutOfRange { value })
        }
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Threshold {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Threshold> for f64 {
    fn from(threshold: Threshold) -> Self {
        threshold.0
    }
}

/// Latch that flips to revealed once and stays there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    #[must_use]
    pub const fn new() -> Self {
        Self { revealed: false }
    }

    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one intersection report.
    ///
    /// Returns `true` only for the report that reveals the element, so the
    /// host can start one-off work such as counter animations exactly once.
    pub const fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.revealed || !is_intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}
