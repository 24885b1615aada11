//! Exporter self-instrumentation.
//!
//! `metrics` holds the registry rendered by `/metrics`; `instrument` holds
//! the axum layers that feed it from `/probe` traffic.

pub mod instrument;
pub mod metrics;

pub use metrics::{InflightGuard, ProbeMetrics};
