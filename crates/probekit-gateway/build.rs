//! Build script for probekit-gateway.
//!
//! Exports build metadata for `build_info`:
//! - `PROBEKIT_REVISION` / `PROBEKIT_BRANCH`: from the environment, else git
//! - `PROBEKIT_BUILD_USER`: from the environment, else `$USER`
//! - `PROBEKIT_BUILD_DATE`: from the environment, else `SOURCE_DATE_EPOCH`
//! - `PROBEKIT_RUSTC_VERSION`: `rustc --version`
//!
//! Anything that cannot be determined is left unset and reported as `unknown`.

use std::env;
use std::process::Command;

fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let out = Command::new(program).args(args).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let s = String::from_utf8(out.stdout).ok()?;
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

fn export(key: &str, value: Option<String>) {
    println!("cargo:rerun-if-env-changed={key}");
    if let Some(v) = env::var(key).ok().or(value) {
        println!("cargo:rustc-env={key}={v}");
    }
}

fn main() {
    export("PROBEKIT_REVISION", command_output("git", &["rev-parse", "HEAD"]));
    export(
        "PROBEKIT_BRANCH",
        command_output("git", &["rev-parse", "--abbrev-ref", "HEAD"]),
    );
    export("PROBEKIT_BUILD_USER", env::var("USER").ok());
    export("PROBEKIT_BUILD_DATE", env::var("SOURCE_DATE_EPOCH").ok());

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    export("PROBEKIT_RUSTC_VERSION", command_output(&rustc, &["--version"]));
}
