//! # Middleware
//!
//! - `tracing_layer` — per-request tracing spans.
//! - `cors` — cross-origin policy from configuration.
//! - `metrics` — request and error counters.

pub mod cors;
pub mod metrics;
pub mod tracing_layer;
