//! Site configuration loaded from TOML.
//!
//! Every key is optional; omitted keys take the reference values. Parsing
//! validates ranges so the state machines never see a zero interval or an
//! out-of-range threshold.
//!
//! ```toml
//! [carousel]
//! interval_ms = 3000
//!
//! [counter]
//! duration_ms = 2000
//! steps = 60
//!
//! [reveal]
//! section_title = 0.2
//! stats = 0.3
//!
//! [nav]
//! header_offset = 80.0
//!
//! [logging]
//! filter = "info,site_core=debug"
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::counter::{CounterSpec, DEFAULT_DURATION, DEFAULT_STEPS};
use crate::error::Error;
use crate::nav::NavSettings;
use crate::result::Result;
use crate::reveal::Threshold;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub interval_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { interval_ms: 3000 }
    }
}

impl CarouselConfig {
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: u64,
    pub steps: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: u64::try_from(DEFAULT_DURATION.as_millis()).unwrap_or(2000),
            steps: DEFAULT_STEPS,
        }
    }
}

impl CounterConfig {
    /// Counter animation for `target` using these timings.
    #[must_use]
    pub const fn spec_for(&self, target: u32) -> CounterSpec {
        CounterSpec::new(target).with_timing(Duration::from_millis(self.duration_ms), self.steps)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub section_title: Threshold,
    pub services: Threshold,
    pub industries: Threshold,
    pub about_reasons: Threshold,
    pub stats: Threshold,
    pub contact: Threshold,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            section_title: Threshold::SECTION_TITLE,
            services: Threshold::SERVICES,
            industries: Threshold::INDUSTRIES,
            about_reasons: Threshold::ABOUT_REASONS,
            stats: Threshold::STATS,
            contact: Threshold::CONTACT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing-subscriber` `EnvFilter` directive
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Complete site configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub carousel: CarouselConfig,
    pub counter: CounterConfig,
    pub reveal: RevealConfig,
    pub nav: NavSettings,
    pub logging: LoggingConfig,
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TomlParseFailed`] for malformed TOML or out-of-range
    /// thresholds, and [`Error::InvalidConfig`] for values that parse but
    /// cannot drive the site (zero interval, zero duration, non-finite
    /// offsets, empty log filter).
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| Error::toml_parse_failed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        if self.carousel.interval_ms == 0 {
            return Err(Error::invalid_config(
                "carousel.interval_ms",
                "must be greater than zero",
            ));
        }
        if self.counter.duration_ms == 0 {
            return Err(Error::invalid_config(
                "counter.duration_ms",
                "must be greater than zero",
            ));
        }
        let nav_values = [
            ("nav.header_offset", self.nav.header_offset),
            ("nav.scrolled_after", self.nav.scrolled_after),
            ("nav.activation_line", self.nav.activation_line),
        ];
        if let Some((key, _)) = nav_values.iter().find(|(_, value)| !value.is_finite()) {
            return Err(Error::invalid_config(*key, "must be a finite number"));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(Error::invalid_config("logging.filter", "must not be empty"));
        }
        Ok(())
    }
}
