//! Leptos 0.7 CSR frontend for the KCMP & Associates site
//!
//! The page is a single scrolling document. All state machines live in
//! `site-core`; this crate binds them to the DOM and browser timers.
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown)
//! - `gloo-timers` intervals behind the `site_core::Scheduler` seam
//! - `IntersectionObserver` driven reveal animations
//! - `tracing` routed to the browser console
//!
//! ## Module Structure
//! - `app`: root component, provides configuration context
//! - `pages`: the home page
//! - `sections`: header, hero, services, industries, about, stats, contact, footer
//! - `components`: carousel, counters, reveal hook, scroll links
//! - `browser`: RAII wrappers for intervals, observers and scroll listeners
//! - `config`: embedded `site.toml`
//! - `telemetry`: console subscriber
//! - `error`: browser error type

#![forbid(unsafe_code)]

pub mod app;
pub mod browser;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod sections;
pub mod telemetry;

pub use app::App;

#[cfg(test)]
mod tests;
