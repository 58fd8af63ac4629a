//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (window > 0, timeouts > 0, versions > 0)
//! - Check the dispatch targets are routable paths
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::GatewayConfig;

/// One semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("invalid metrics address '{0}'")]
    InvalidMetricsAddress(String),

    #[error("support matrix entry '{family}' has non-positive minimum version {minimum}")]
    NonPositiveMinimumVersion { family: String, minimum: f64 },

    #[error("support matrix contains an empty family name")]
    EmptyFamilyName,

    #[error("dispatch target '{0}' must be an absolute path")]
    RelativeDispatchTarget(String),

    #[error("session renewal window must be positive, got {0} minutes")]
    NonPositiveRenewalWindow(i64),

    #[error("session cookie name must not be empty")]
    EmptyCookieName,

    #[error("request timeout must be positive")]
    ZeroRequestTimeout,
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    for (family, minimum) in &config.support_matrix.minimums {
        if family.is_empty() {
            errors.push(ValidationError::EmptyFamilyName);
        }
        if *minimum <= 0.0 {
            errors.push(ValidationError::NonPositiveMinimumVersion {
                family: family.clone(),
                minimum: *minimum,
            });
        }
    }

    for target in [
        &config.dispatch.crawler_target,
        &config.dispatch.primary_target,
        &config.dispatch.fallback_target,
    ] {
        if !target.starts_with('/') || target.len() == 1 {
            errors.push(ValidationError::RelativeDispatchTarget(target.clone()));
        }
    }

    if config.session.renewal_window_minutes <= 0 {
        errors.push(ValidationError::NonPositiveRenewalWindow(
            config.session.renewal_window_minutes,
        ));
    }

    if config.session.cookie_name.is_empty() {
        errors.push(ValidationError::EmptyCookieName);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&GatewayConfig::default()).is_ok());
    }

    #[test]
    fn test_all_errors_are_collected() {
        let mut config = GatewayConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.session.renewal_window_minutes = 0;
        config.session.cookie_name = String::new();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_relative_dispatch_target_rejected() {
        let mut config = GatewayConfig::default();
        config.dispatch.fallback_target = "fallback.html".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::RelativeDispatchTarget(_))));
    }

    #[test]
    fn test_non_positive_matrix_minimum_rejected() {
        let mut config = GatewayConfig::default();
        config
            .support_matrix
            .minimums
            .insert("Netscape".to_string(), 0.0);

        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::NonPositiveMinimumVersion { .. })));
    }
}
