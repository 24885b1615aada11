//! Exporter config loader (strict parsing).

pub mod schema;

use std::fs;
use std::net::SocketAddr;

use probekit_core::error::{ProbeError, Result};

pub use schema::{BasicAuthConfig, BearerAuthConfig, ExporterConfig, ScriptConfig, TlsConfig};

pub fn load_from_file(path: &str) -> Result<ExporterConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ProbeError::Config(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ExporterConfig> {
    let cfg: ExporterConfig = serde_yaml::from_str(s)
        .map_err(|e| ProbeError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Parse a listen address; a bare `:port` binds all interfaces.
pub fn listen_addr(s: &str) -> Result<SocketAddr> {
    let full = if s.starts_with(':') { format!("0.0.0.0{s}") } else { s.to_string() };
    full.parse()
        .map_err(|e| ProbeError::Config(format!("invalid listen address {s}: {e}")))
}
