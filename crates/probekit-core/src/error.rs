//! Shared error type across probekit crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / missing parameter.
    BadRequest,
    /// Requested script is not registered.
    ScriptNotFound,
    /// Auth failed.
    AuthFailed,
    /// Script could not be run to completion.
    ExecFailed,
    /// Invalid configuration.
    InvalidConfig,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::ScriptNotFound => "SCRIPT_NOT_FOUND",
            ClientCode::AuthFailed => "AUTH_FAILED",
            ClientCode::ExecFailed => "EXEC_FAILED",
            ClientCode::InvalidConfig => "INVALID_CONFIG",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("script not found")]
    ScriptNotFound,
    #[error("auth failed")]
    AuthFailed,
    #[error("script failed: {0}")]
    Exec(String),
    #[error("token: {0}")]
    Token(String),
    #[error("config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl ProbeError {
    /// Map internal error to a stable client-facing code.
    ///
    /// Token errors collapse into `AuthFailed` so callers never learn which
    /// check rejected them.
    pub fn client_code(&self) -> ClientCode {
        match self {
            ProbeError::BadRequest(_) => ClientCode::BadRequest,
            ProbeError::ScriptNotFound => ClientCode::ScriptNotFound,
            ProbeError::AuthFailed | ProbeError::Token(_) => ClientCode::AuthFailed,
            ProbeError::Exec(_) => ClientCode::ExecFailed,
            ProbeError::Config(_) => ClientCode::InvalidConfig,
            ProbeError::Internal(_) => ClientCode::Internal,
        }
    }
}
