//! Request instrumentation layers for `/probe`.
//!
//! - `http_layer`: every request, labeled by status code and method.
//! - `script_layer`: only requests carrying a non-empty `script` parameter;
//!   in-flight gauge, duration summary, and request counter keyed by script
//!   name alone (outcome is not a label).

use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;
use crate::probe::QueryPairs;

pub async fn http_layer(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let method = request.method().as_str().to_ascii_lowercase();
    let start = Instant::now();

    let response = next.run(request).await;

    let code = response.status().as_u16().to_string();
    let labels = [("code", code.as_str()), ("method", method.as_str())];
    let metrics = state.metrics();
    metrics.http_requests.inc(&labels);
    metrics.http_duration.observe(&labels, start.elapsed());

    response
}

pub async fn script_layer(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let script = QueryPairs::from_uri(request.uri()).get("script").to_string();
    if script.is_empty() {
        // no fake label; the handler rejects these
        return next.run(request).await;
    }

    let metrics = state.metrics();
    let _inflight = metrics.track_inflight(&script);
    let start = Instant::now();

    let response = next.run(request).await;

    let labels = [("script", script.as_str())];
    metrics.script_duration.observe(&labels, start.elapsed());
    metrics.script_requests.inc(&labels);

    response
}
