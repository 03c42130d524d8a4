//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogshipConfig {
    /// Subsystem identifier every logger is scoped to (e.g. "com.example.app").
    pub subsystem: String,

    /// Process logging output.
    pub logging: LoggingConfig,

    /// Remote collector settings.
    pub upload: UploadConfig,

    /// Metrics exporter settings.
    pub metrics: MetricsConfig,
}

impl Default for LogshipConfig {
    fn default() -> Self {
        Self {
            subsystem: "logship".to_string(),
            logging: LoggingConfig::default(),
            upload: UploadConfig::default(),
            metrics: MetricsConfig::default(),
        }
    }
}

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,

    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Upload configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Collector endpoint logs are POSTed to.
    pub endpoint: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Optional bearer token.
    pub api_key: Option<String>,

    /// Initial upload consent.
    pub do_upload_logs: bool,

    /// Route uploads through proxies from the environment.
    pub use_system_proxy: bool,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080/logs".to_string(),
            timeout_secs: 30,
            api_key: None,
            do_upload_logs: true,
            use_system_proxy: true,
        }
    }
}

/// Metrics configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Enable the Prometheus endpoint.
    pub enabled: bool,

    /// Endpoint bind address.
    pub address: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            address: "0.0.0.0:9090".to_string(),
        }
    }
}
