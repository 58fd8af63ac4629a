//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Respect RUST_LOG when set, otherwise the configured level
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - Environment overrides configuration for operator convenience

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// `default_level` comes from configuration and applies when RUST_LOG is
/// unset. Calling this twice is a programming error and will panic, same
/// as any double subscriber installation.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("collection_gateway={default_level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
