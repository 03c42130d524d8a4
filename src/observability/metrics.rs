//! Metrics collection and exposition.
//!
//! # Metrics
//! - `logship_loggers_created_total` (counter): loggers created, by category
//! - `logship_cached_loggers` (gauge): loggers held by the cache
//! - `logship_entries_total` (counter): entries written, by level
//! - `logship_uploads_total` (counter): upload cycles, by outcome
//! - `logship_snapshot_bytes` (histogram): size of rendered snapshots

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

use crate::sink::LogLevel;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_logger_created(category: &str) {
    counter!("logship_loggers_created_total", "category" => category.to_string()).increment(1);
}

pub fn record_cached_loggers(count: usize) {
    gauge!("logship_cached_loggers").set(count as f64);
}

pub fn record_entry(level: LogLevel) {
    counter!("logship_entries_total", "level" => level.as_str()).increment(1);
}

/// `outcome` is one of `success`, `failure`, `skipped`.
pub fn record_upload(outcome: &'static str) {
    counter!("logship_uploads_total", "outcome" => outcome).increment(1);
}

pub fn record_snapshot_bytes(bytes: usize) {
    histogram!("logship_snapshot_bytes").record(bytes as f64);
}
