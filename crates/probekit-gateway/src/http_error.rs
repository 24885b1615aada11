//! Request-boundary mapping of `ProbeError` to status + plain-text body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use probekit_core::error::{ClientCode, ProbeError};

use crate::auth::middleware::NOT_AUTHORIZED;

#[derive(Debug)]
pub struct HttpError(pub ProbeError);

impl From<ProbeError> for HttpError {
    fn from(e: ProbeError) -> Self {
        Self(e)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, body) = match (self.0.client_code(), self.0) {
            (ClientCode::BadRequest, ProbeError::BadRequest(msg)) => (StatusCode::BAD_REQUEST, msg),
            (ClientCode::ScriptNotFound, _) => (StatusCode::BAD_REQUEST, "Script not found".to_string()),
            (ClientCode::AuthFailed, _) => (StatusCode::UNAUTHORIZED, NOT_AUTHORIZED.to_string()),
            (code, e) => {
                tracing::error!(code = code.as_str(), error = %e, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };
        (status, body).into_response()
    }
}
