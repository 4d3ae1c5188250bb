//! Embedded site configuration.

use site_core::{Result, SiteConfig};

/// Contents of `site.toml`, compiled into the bundle.
pub const SITE_TOML: &str = include_str!("../site.toml");

/// Parse the embedded configuration.
///
/// # Errors
///
/// Returns the parse or validation error; callers fall back to
/// [`SiteConfig::default`].
pub fn load_embedded() -> Result<SiteConfig> {
    SiteConfig::from_toml_str(SITE_TOML)
}

/// Configuration provided through context, or the defaults outside an `App`.
#[must_use]
pub fn use_site_config() -> SiteConfig {
    leptos::prelude::use_context::<SiteConfig>().unwrap_or_default()
}
