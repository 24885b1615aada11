//! Script registry and process invocation.
//!
//! The registry is compiled once from config and is read-only afterwards.
//! Invocation goes through the `ScriptRunner` trait so the probe handler can
//! be exercised without spawning real processes.

pub mod registry;
pub mod runner;

pub use registry::{CommandLine, ScriptRegistry};
pub use runner::{ProcessRunner, ScriptRunner};
