//! `/probe` orchestration.
//!
//! resolve params -> resolve script -> invoke -> transform -> respond.
//! Execution failures are a 200 with `script_success{} 0`; only missing or
//! unknown scripts are HTTP errors.

pub mod handler;
pub mod params;

pub use handler::{execute, probe};
pub use params::{OutputMode, ProbeRequest, QueryPairs};
