//! Health check endpoints

use axum::{extract::State, response::Response, routing::get, Router};
use axum_helpers::{health_router, run_health_checks, HealthCheckFuture};
use database::postgres::check_health;

use crate::state::AppState;

/// Readiness: `200` when PostgreSQL answers `SELECT 1`, `503` otherwise.
async fn ready(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "database",
        Box::pin(async { check_health(&state.db).await.map_err(|e| e.to_string()) }),
    )];

    run_health_checks(checks).await
}

pub fn router(state: AppState) -> Router {
    health_router(state.config.app)
        .merge(Router::new().route("/ready", get(ready)).with_state(state))
}
