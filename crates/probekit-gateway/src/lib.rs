//! probekit gateway library entry.
//!
//! Wires config, the script registry, the auth gate, instrumentation, and
//! the probe handler into an axum router. It is consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod auth;
pub mod build_info;
pub mod config;
pub mod http_error;
pub mod obs;
pub mod ops;
pub mod probe;
pub mod router;
pub mod scripts;
