//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges and formats (timeouts > 0, URLs, addresses)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LogshipConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;
use url::Url;

use crate::config::schema::LogshipConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("subsystem must not be empty")]
    EmptySubsystem,

    #[error("invalid log level '{0}'")]
    InvalidLogLevel(String),

    #[error("invalid upload endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("upload timeout must be greater than zero")]
    ZeroTimeout,

    #[error("invalid metrics address '{0}'")]
    InvalidMetricsAddress(String),
}

/// Check `config` and collect every problem found.
pub fn validate_config(config: &LogshipConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.subsystem.trim().is_empty() {
        errors.push(ValidationError::EmptySubsystem);
    }

    if tracing::Level::from_str(&config.logging.level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(config.logging.level.clone()));
    }

    match Url::parse(&config.upload.endpoint) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::InvalidEndpoint {
            endpoint: config.upload.endpoint.clone(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::InvalidEndpoint {
            endpoint: config.upload.endpoint.clone(),
            reason: e.to_string(),
        }),
    }

    if config.upload.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.metrics.enabled && config.metrics.address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidMetricsAddress(config.metrics.address.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
