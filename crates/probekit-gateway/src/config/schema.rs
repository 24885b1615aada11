use std::collections::HashSet;

use serde::Deserialize;
use probekit_core::error::{ProbeError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    #[serde(default)]
    pub tls: TlsConfig,

    #[serde(default, rename = "basicAuth")]
    pub basic_auth: BasicAuthConfig,

    #[serde(default, rename = "bearerAuth")]
    pub bearer_auth: BearerAuthConfig,

    #[serde(default)]
    pub scripts: Vec<ScriptConfig>,
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.scripts.is_empty() {
            return Err(ProbeError::Config("scripts must not be empty".into()));
        }

        let mut seen = HashSet::new();
        for s in &self.scripts {
            s.validate()?;
            if !seen.insert(s.name.as_str()) {
                return Err(ProbeError::Config(format!("duplicate script name: {}", s.name)));
            }
        }

        self.tls.validate()?;
        self.basic_auth.validate()?;
        self.bearer_auth.validate()?;

        Ok(())
    }

    /// Command line registered under `name`, exact match.
    pub fn get_script(&self, name: &str) -> Option<&str> {
        self.scripts
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.script.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TlsConfig {
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub crt: String,
    #[serde(default)]
    pub key: String,
}

impl TlsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.active && (self.crt.is_empty() || self.key.is_empty()) {
            return Err(ProbeError::Config(
                "tls.crt and tls.key are required when tls.active is true".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BasicAuthConfig {
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl BasicAuthConfig {
    pub fn validate(&self) -> Result<()> {
        if self.active && self.username.is_empty() {
            return Err(ProbeError::Config(
                "basicAuth.username must not be empty when basicAuth.active is true".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BearerAuthConfig {
    #[serde(default)]
    pub active: bool,
    #[serde(default, rename = "signingKey")]
    pub signing_key: String,
}

impl BearerAuthConfig {
    pub fn validate(&self) -> Result<()> {
        if self.active && self.signing_key.is_empty() {
            return Err(ProbeError::Config(
                "bearerAuth.signingKey must not be empty when bearerAuth.active is true".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptConfig {
    pub name: String,
    pub script: String,
}

impl ScriptConfig {
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(ProbeError::Config("script name must not be empty".into()));
        }
        if self.script.trim().is_empty() {
            return Err(ProbeError::Config(format!(
                "script command must not be empty (script={})",
                self.name
            )));
        }
        Ok(())
    }
}
