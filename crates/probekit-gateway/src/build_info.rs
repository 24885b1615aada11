//! Static build metadata for `--version`, the landing page, and the
//! `scripts_build_info` gauge.

/// Build metadata captured at compile time by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildInfo {
    pub version: &'static str,
    pub revision: &'static str,
    pub branch: &'static str,
    pub rust_version: &'static str,
    pub build_user: &'static str,
    pub build_date: &'static str,
}

const fn or_unknown(v: Option<&'static str>) -> &'static str {
    match v {
        Some(v) => v,
        None => "unknown",
    }
}

pub const BUILD: BuildInfo = BuildInfo {
    version: env!("CARGO_PKG_VERSION"),
    revision: or_unknown(option_env!("PROBEKIT_REVISION")),
    branch: or_unknown(option_env!("PROBEKIT_BRANCH")),
    rust_version: or_unknown(option_env!("PROBEKIT_RUSTC_VERSION")),
    build_user: or_unknown(option_env!("PROBEKIT_BUILD_USER")),
    build_date: or_unknown(option_env!("PROBEKIT_BUILD_DATE")),
};

impl BuildInfo {
    /// Multi-line `--version` output.
    pub fn print(&self, program: &str) -> String {
        format!(
            "{program}, version {} (branch: {}, revision: {})\n  build user:       {}\n  build date:       {}\n  rust version:     {}",
            self.version, self.branch, self.revision, self.build_user, self.build_date, self.rust_version
        )
    }

    /// One-line version summary logged at startup.
    pub fn info(&self) -> String {
        format!("(version={}, branch={}, revision={})", self.version, self.branch, self.revision)
    }

    /// One-line build context logged at startup.
    pub fn build_context(&self) -> String {
        format!("(rust={}, user={}, date={})", self.rust_version, self.build_user, self.build_date)
    }
}
