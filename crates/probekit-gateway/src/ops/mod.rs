//! Operational HTTP endpoints.
//!
//! - `/metrics` : exporter self-metrics, Prometheus text format
//! - `/`        : landing page (also the fallback for unknown paths)

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::app_state::AppState;

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.metrics().render();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let b = state.build();
    Html(format!(
        "<html>
<head><title>Script Exporter</title></head>
<body>
<h1>Script Exporter</h1>
<p><a href='/metrics'>Metrics</a></p>
<p><a href='/probe'>Probe</a></p>
<p><ul>
<li>version: {}</li>
<li>branch: {}</li>
<li>revision: {}</li>
<li>rust version: {}</li>
<li>build user: {}</li>
<li>build date: {}</li>
</ul></p>
</body>
</html>",
        b.version, b.branch, b.revision, b.rust_version, b.build_user, b.build_date
    ))
}
