//! Top-level facade crate for probekit.
//!
//! Re-exports the core transformer/error types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use probekit_core::*;
}

pub mod gateway {
    pub use probekit_gateway::*;
}
