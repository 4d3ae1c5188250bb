//! `tracing` output routed to the browser console.
//!
//! Events are formatted by `tracing-subscriber`'s fmt layer into a buffer and
//! flushed to `console.error` / `console.warn` / `console.log` by level.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::error::{Result, UiError};

/// Which console method an event is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Error,
    Warn,
    Log,
}

impl ConsoleLevel {
    #[must_use]
    pub fn for_level(level: &Level) -> Self {
        if *level == Level::ERROR {
            Self::Error
        } else if *level == Level::WARN {
            Self::Warn
        } else {
            Self::Log
        }
    }
}

/// Buffers one formatted event and writes it to the console on drop.
pub struct ConsoleWriter {
    level: ConsoleLevel,
    buffer: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buffer);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }
        let message = wasm_bindgen::JsValue::from_str(line);
        match self.level {
            ConsoleLevel::Error => web_sys::console::error_1(&message),
            ConsoleLevel::Warn => web_sys::console::warn_1(&message),
            ConsoleLevel::Log => web_sys::console::log_1(&message),
        }
    }
}

/// [`MakeWriter`] producing a [`ConsoleWriter`] per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl ConsoleMakeWriter {
    const fn writer(level: ConsoleLevel) -> ConsoleWriter {
        ConsoleWriter {
            level,
            buffer: Vec::new(),
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        Self::writer(ConsoleLevel::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        Self::writer(ConsoleLevel::for_level(meta.level()))
    }
}

/// Install the global subscriber with the given `EnvFilter` directive.
///
/// # Errors
///
/// Returns [`UiError::TelemetryFailed`] for an unparsable directive or when a
/// subscriber is already installed.
pub fn init(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter).map_err(|e| UiError::TelemetryFailed(e.to_string()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .try_init()
        .map_err(|e| UiError::TelemetryFailed(e.to_string()))
}
