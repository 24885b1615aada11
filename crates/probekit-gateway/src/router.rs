//! Axum router wiring.
//!
//! `/probe` layers, outermost first: HTTP metrics -> auth gate -> per-script
//! metrics -> handler. `/metrics` and `/` are not behind the gate.

use axum::{middleware::from_fn_with_state, routing::get, Router};

use crate::{app_state::AppState, auth, obs::instrument, ops, probe};

pub fn build_router(state: AppState) -> Router {
    let probe_routes = Router::new()
        .route("/probe", get(probe::probe))
        .route_layer(from_fn_with_state(state.clone(), instrument::script_layer))
        .route_layer(from_fn_with_state(state.clone(), auth::middleware::require_auth))
        .route_layer(from_fn_with_state(state.clone(), instrument::http_layer));

    Router::new()
        .route("/metrics", get(ops::metrics))
        .route("/", get(ops::index))
        .merge(probe_routes)
        .fallback(ops::index)
        .with_state(state)
}
