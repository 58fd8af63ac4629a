//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): requests by handler and status
//! - `gateway_dispatch_total` (counter): root dispatch decisions by target
//! - `gateway_session_renewals_total` (counter): renewal outcomes
//! - `gateway_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Low-overhead updates (atomic counters under the hood)
//! - Labels kept low-cardinality: handler names and decision outcomes only,
//!   never raw paths

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
pub fn init_metrics(address: SocketAddr) {
    match PrometheusBuilder::new()
        .with_http_listener(address)
        .install()
    {
        Ok(()) => tracing::info!(address = %address, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a completed request.
pub fn record_request(handler: &str, status: u16, start: Instant) {
    metrics::counter!(
        "gateway_requests_total",
        "handler" => handler.to_string(),
        "status" => status.to_string(),
    )
    .increment(1);
    metrics::histogram!("gateway_request_duration_seconds").record(start.elapsed().as_secs_f64());
}

/// Record a session renewal decision.
pub fn record_session_renewal(renewed: bool) {
    let outcome = if renewed { "renewed" } else { "unchanged" };
    metrics::counter!("gateway_session_renewals_total", "outcome" => outcome).increment(1);
}
