//! Configuration subsystem.
//!
//! Schema, loading and semantic validation for the gateway. Configuration
//! is loaded once at process start and is immutable for the process
//! lifetime; the support matrix and session renewal window are the only
//! externally tunable policy parameters.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::GatewayConfig;
