//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Logger writes, cache, upload cycles produce:
//!     → logging.rs (tracing subscriber: pretty or JSON)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stdout / log aggregation
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Every Logger write is mirrored as a tracing event with `subsystem` and
//!   `category` fields
//! - Metrics are cheap no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
