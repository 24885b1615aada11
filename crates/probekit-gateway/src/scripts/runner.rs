use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use probekit_core::error::{ProbeError, Result};

use super::CommandLine;

/// Runs a command line and returns its captured stdout.
///
/// A launch failure or a non-zero exit is a single `ProbeError::Exec`; no
/// partial output is returned on failure.
#[async_trait]
pub trait ScriptRunner: Send + Sync {
    async fn run(&self, cmd: &CommandLine, extra_args: &[String]) -> Result<String>;
}

/// Child-process runner. Waits for the child without a timeout; a hung
/// script holds its request until it exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

#[async_trait]
impl ScriptRunner for ProcessRunner {
    async fn run(&self, cmd: &CommandLine, extra_args: &[String]) -> Result<String> {
        let output = Command::new(&cmd.program)
            .args(&cmd.args)
            .args(extra_args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| ProbeError::Exec(format!("launch {}: {e}", cmd.program)))?;

        if !output.status.success() {
            return Err(ProbeError::Exec(format!("{} exited with {}", cmd.program, output.status)));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
