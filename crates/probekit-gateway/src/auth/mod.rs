//! Authentication gate for `/probe`.
//!
//! Each configured scheme compiles into a `Verifier`; the gate runs them in
//! order and denies on the first failure, so enabling several schemes
//! requires all of them to pass. With no verifiers every request passes.

pub mod basic;
pub mod bearer;
pub mod middleware;

use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::config::ExporterConfig;

pub use basic::BasicVerifier;
pub use bearer::{issue_token, BearerVerifier};

/// Decision from one verifier or from the whole gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthDecision {
    Allow,
    /// `reason` is for logs only; clients always get the same 401.
    Deny { reason: &'static str },
}

/// One authentication scheme.
pub trait Verifier: Send + Sync {
    fn scheme(&self) -> &'static str;
    fn check(&self, headers: &HeaderMap) -> AuthDecision;

    /// `WWW-Authenticate` value sent with a denial, if the scheme has one.
    fn challenge(&self) -> Option<&'static str> {
        None
    }
}

/// Ordered list of active verifiers. Built once at startup.
#[derive(Default)]
pub struct AuthGate {
    verifiers: Vec<Box<dyn Verifier>>,
}

impl AuthGate {
    pub fn new(verifiers: Vec<Box<dyn Verifier>>) -> Self {
        Self { verifiers }
    }

    pub fn from_config(cfg: &ExporterConfig) -> Self {
        let mut verifiers: Vec<Box<dyn Verifier>> = Vec::new();
        if cfg.basic_auth.active {
            verifiers.push(Box::new(BasicVerifier::new(
                &cfg.basic_auth.username,
                &cfg.basic_auth.password,
            )));
        }
        if cfg.bearer_auth.active {
            verifiers.push(Box::new(BearerVerifier::new(&cfg.bearer_auth.signing_key)));
        }
        Self::new(verifiers)
    }

    pub fn is_enabled(&self) -> bool {
        !self.verifiers.is_empty()
    }

    pub fn schemes(&self) -> Vec<&'static str> {
        self.verifiers.iter().map(|v| v.scheme()).collect()
    }

    pub fn authenticate(&self, headers: &HeaderMap) -> AuthDecision {
        for v in &self.verifiers {
            if let AuthDecision::Deny { reason } = v.check(headers) {
                tracing::debug!(scheme = v.scheme(), reason, "auth denied");
                return AuthDecision::Deny { reason };
            }
        }
        AuthDecision::Allow
    }

    /// Challenges of every active scheme, in verifier order.
    pub fn challenges(&self) -> Vec<&'static str> {
        self.verifiers.iter().filter_map(|v| v.challenge()).collect()
    }
}

/// All `Authorization` header values that are valid strings.
pub(crate) fn authorization_values(headers: &HeaderMap) -> impl Iterator<Item = &str> {
    headers
        .get_all(AUTHORIZATION)
        .iter()
        .filter_map(|v| v.to_str().ok())
}

/// First `Authorization` value whose scheme token equals `scheme`
/// (case-insensitive).
pub(crate) fn find_scheme<'a>(headers: &'a HeaderMap, scheme: &str) -> Option<&'a str> {
    authorization_values(headers).find(|v| {
        v.split(' ')
            .next()
            .is_some_and(|s| s.eq_ignore_ascii_case(scheme))
    })
}
