//! probekit core: error types and the exposition-text transformer.
//!
//! This crate turns the raw stdout of a probe script into metrics exposition
//! text and renders the synthetic probe header. It carries no transport or
//! runtime dependencies so the transformer can be tested and reused on its
//! own.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Script output is untrusted input: malformed lines are dropped, never
//! allowed to crash the exporter.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod exposition;

/// Shared result type.
pub use error::{Result, ProbeError};
