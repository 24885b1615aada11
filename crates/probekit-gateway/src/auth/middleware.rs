//! Axum middleware wrapping `/probe` with the authentication gate.

use axum::{
    extract::{Request, State},
    http::{header::WWW_AUTHENTICATE, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;

use super::AuthDecision;

pub const NOT_AUTHORIZED: &str = "Not authorized";

/// Deny with a uniform 401 or pass the request through.
pub async fn require_auth(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let gate = state.auth();
    if !gate.is_enabled() {
        return next.run(request).await;
    }

    match gate.authenticate(request.headers()) {
        AuthDecision::Allow => next.run(request).await,
        AuthDecision::Deny { .. } => {
            let mut resp = (StatusCode::UNAUTHORIZED, NOT_AUTHORIZED).into_response();
            for challenge in gate.challenges() {
                resp.headers_mut()
                    .append(WWW_AUTHENTICATE, HeaderValue::from_static(challenge));
            }
            resp
        }
    }
}
