//! Result alias and logging fallbacks for hosts.
//!
//! Browser and native hosts rarely want to stop on a failed measurement or
//! a bad config file; they log once and carry on with a fallback.

use std::fmt::Display;

use crate::error::Error;

/// The standard Result type for site operations.
///
/// # Examples
///
/// ```
/// use site_core::{Result, SiteConfig};
///
/// fn interval_ms(source: &str) -> Result<u64> {
///     let config = SiteConfig::from_toml_str(source)?;
///     Ok(config.carousel.interval_ms)
/// }
///
/// assert_eq!(interval_ms("[carousel]\ninterval_ms = 4500\n").ok(), Some(4500));
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Fallbacks that log the discarded error under a short `what` label.
pub trait ResultExt<T> {
    /// `Some(value)`, or `None` after a warning naming `what`.
    fn ok_or_log(self, what: &str) -> Option<T>;

    /// The value, or `fallback` after a warning naming `what`.
    fn or_logged(self, what: &str, fallback: T) -> T;
}

impl<T, E: Display> ResultExt<T> for std::result::Result<T, E> {
    fn ok_or_log(self, what: &str) -> Option<T> {
        self.map_err(|e| tracing::warn!(error = %e, "{what} unavailable"))
            .ok()
    }

    fn or_logged(self, what: &str, fallback: T) -> T {
        self.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "{what} invalid, using fallback");
            fallback
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_or_log_keeps_value() {
        let result: Result<i32> = Ok(42);
        assert_eq!(result.ok_or_log("answer"), Some(42));
    }

    #[test]
    fn test_ok_or_log_drops_error() {
        let result: Result<i32> = Err(Error::toml_parse_failed("bad"));
        assert_eq!(result.ok_or_log("answer"), None);
    }

    #[test]
    fn test_or_logged_falls_back() {
        let result: Result<u64> = Err(Error::invalid_config("k", "r"));
        assert_eq!(result.or_logged("interval", 3000), 3000);
    }

    #[test]
    fn test_or_logged_accepts_foreign_errors() {
        let result: std::result::Result<f64, String> = Err("no window".to_string());
        assert!(result.or_logged("scroll offset", 0.0).abs() < f64::EPSILON);
    }
}
