//! Per-request observation: metrics plus one access log line.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

pub async fn observe_requests(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());
    let route = route.as_str();
    let method = req.method().clone();
    let metrics = state.metrics();

    metrics.requests_in_flight.inc(&[("route", route)]);
    let started = Instant::now();
    let res = next.run(req).await;
    let latency = started.elapsed();
    metrics.requests_in_flight.dec(&[("route", route)]);

    let status = res.status();
    metrics
        .requests
        .inc(&[("route", route), ("status", status.as_str())]);
    metrics.request_duration.observe(&[("route", route)], latency);
    if status == StatusCode::BAD_REQUEST {
        metrics.invalid_input.inc(&[("route", route)]);
    }

    tracing::info!(
        %method,
        %route,
        status = status.as_u16(),
        latency_us = u64::try_from(latency.as_micros()).unwrap_or(u64::MAX),
        "request finished"
    );
    res
}
