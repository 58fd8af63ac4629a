//! Observability: structured logging and metrics exposition.
//!
//! The core decision functions stay pure; they emit structured events and
//! counters but never read or hold observability state themselves.

pub mod logging;
pub mod metrics;
