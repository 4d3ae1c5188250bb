//! Error types for the browser layer
//!
//! Everything that can go wrong here is a missing browser object or a
//! rejected DOM call. None of it is fatal to the page: callers log and carry
//! on with a degraded section.

/// Errors raised while talking to the DOM
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    /// Not running inside a browser window
    #[error("window is not available")]
    WindowNotAvailable,

    /// Window has no document
    #[error("document is not available")]
    DocumentNotAvailable,

    /// No element carries the requested id
    #[error("element not found: #{0}")]
    ElementNotFound(String),

    /// Adding or removing an event listener failed
    #[error("event listener failed: {0}")]
    ListenerFailed(String),

    /// `IntersectionObserver` could not be constructed
    #[error("intersection observer failed: {0}")]
    ObserverFailed(String),

    /// Reading the scroll position failed
    #[error("scroll position unavailable: {0}")]
    ScrollFailed(String),

    /// The tracing subscriber could not be installed
    #[error("telemetry init failed: {0}")]
    TelemetryFailed(String),
}

impl UiError {
    /// Wrap a rejected JS call, keeping its debug rendering.
    pub fn listener(value: &wasm_bindgen::JsValue) -> Self {
        Self::ListenerFailed(format!("{value:?}"))
    }
}

/// Result type alias for browser operations
pub type Result<T> = std::result::Result<T, UiError>;
