use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};

use probekit_core::error::{ProbeError, Result};
use probekit_core::exposition::{render_probe, Transformer};

use crate::app_state::AppState;
use crate::http_error::HttpError;

use super::params::{OutputMode, ProbeRequest, QueryPairs};

pub async fn probe(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> std::result::Result<Response, HttpError> {
    let req = ProbeRequest::from_query(&QueryPairs::new(pairs)).inspect_err(|e| {
        tracing::warn!(error = %e, "probe rejected");
    })?;

    let body = execute(&state, &req).await?;

    Ok(([(CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response())
}

/// Run one probe and render its response body.
///
/// Only an unknown script is an error; a failing script renders a body with
/// `script_success{} 0`.
pub async fn execute(state: &AppState, req: &ProbeRequest) -> Result<String> {
    let start = Instant::now();

    let Some(cmd) = state.scripts().resolve(&req.script) else {
        tracing::warn!(script = %req.script, "script not found");
        return Err(ProbeError::ScriptNotFound);
    };

    let stdout = match state.runner().run(cmd, &req.extra_args).await {
        Ok(stdout) => stdout,
        Err(e) => {
            tracing::warn!(script = %req.script, error = %e, "script failed");
            return Ok(render_probe(false, start.elapsed(), None));
        }
    };

    if req.output == OutputMode::Ignore {
        return Ok(render_probe(true, start.elapsed(), None));
    }

    let out = Transformer::new(req.prefix.as_str()).transform(&stdout);
    if out.dropped > 0 {
        state
            .metrics()
            .script_dropped_lines
            .add(&[("script", &req.script)], out.dropped as u64);
    }

    Ok(render_probe(true, start.elapsed(), Some(&out.text)))
}
