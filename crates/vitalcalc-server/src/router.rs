//! Axum router wiring.
//!
//! Calculation routes sit behind the body limit and request observer;
//! ops routes are left unobserved so scrapes do not skew the numbers.

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, handlers, obs, ops};

pub fn build_router(state: AppState) -> Router {
    let max_body = state.cfg().server.max_body_bytes;

    let calc_routes = Router::new()
        .route("/bmi", post(handlers::bmi::bmi))
        .route("/bmr", post(handlers::bmr::bmr))
        .layer(DefaultBodyLimit::max(max_body))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            obs::observe_requests,
        ));

    Router::new()
        .merge(calc_routes)
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
