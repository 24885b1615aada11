//! Shared application state for the probekit exporter.
//!
//! Everything here is built once at startup. The registry, auth gate, and
//! config are read-only afterwards; only the metrics are mutated by requests.

use std::sync::Arc;

use crate::auth::AuthGate;
use crate::build_info::{self, BuildInfo};
use crate::config::ExporterConfig;
use crate::obs::ProbeMetrics;
use crate::scripts::{ProcessRunner, ScriptRegistry, ScriptRunner};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<ProbeMetrics>,
    runner: Arc<dyn ScriptRunner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    scripts: ScriptRegistry,
    auth: AuthGate,
    build: BuildInfo,
}

impl AppState {
    /// Build application state with the child-process runner.
    pub fn new(cfg: ExporterConfig) -> Self {
        Self::with_runner(cfg, Arc::new(ProcessRunner))
    }

    /// Build application state with a custom runner (tests, dry runs).
    pub fn with_runner(cfg: ExporterConfig, runner: Arc<dyn ScriptRunner>) -> Self {
        let scripts = ScriptRegistry::from_config(&cfg);
        let auth = AuthGate::from_config(&cfg);
        let build = build_info::BUILD;

        tracing::info!(
            scripts = scripts.len(),
            auth = ?auth.schemes(),
            "exporter state ready"
        );

        Self {
            metrics: Arc::new(ProbeMetrics::new(&build)),
            inner: Arc::new(AppStateInner { cfg, scripts, auth, build }),
            runner,
        }
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn scripts(&self) -> &ScriptRegistry {
        &self.inner.scripts
    }

    pub fn auth(&self) -> &AuthGate {
        &self.inner.auth
    }

    pub fn build(&self) -> &BuildInfo {
        &self.inner.build
    }

    pub fn metrics(&self) -> Arc<ProbeMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn runner(&self) -> Arc<dyn ScriptRunner> {
        Arc::clone(&self.runner)
    }
}
