//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::client::support;

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address, connection cap).
    pub listener: ListenerConfig,

    /// Browser family → minimum supported major version.
    pub support_matrix: SupportMatrixConfig,

    /// Root-dispatch rewrite targets.
    pub dispatch: DispatchConfig,

    /// Session continuity settings.
    pub session: SessionConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Browser support matrix. Treated as configuration, not logic: any
/// engineer may extend the table without touching the evaluator.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SupportMatrixConfig {
    /// Family name → minimum major version (decimal, inclusive).
    pub minimums: BTreeMap<String, f64>,
}

impl Default for SupportMatrixConfig {
    fn default() -> Self {
        Self {
            minimums: support::default_minimums(),
        }
    }
}

/// Internal rewrite targets for the root dispatcher.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Indexable rendering entry point for crawlers.
    pub crawler_target: String,

    /// Primary rich-client entry point.
    pub primary_target: String,

    /// Degraded static fallback for unsupported browsers.
    pub fallback_target: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            crawler_target: "/pages/crawler".to_string(),
            primary_target: "/app".to_string(),
            fallback_target: "/fallback.html".to_string(),
        }
    }
}

/// Session continuity configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Sliding renewal window in minutes.
    pub renewal_window_minutes: i64,

    /// Name of the transport cookie carrying the session token.
    pub cookie_name: String,
}

impl SessionConfig {
    /// Renewal window as a duration.
    pub fn renewal_window(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.renewal_window_minutes)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            renewal_window_minutes: 60,
            cookie_name: "session".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
