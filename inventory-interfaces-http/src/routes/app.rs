use axum::Router;

use inventory_application::AppState;

use crate::handlers::{ops_handlers, scan_handlers, ws_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", axum::routing::get(scan_handlers::show_form))
        .route(
            "/scan",
            axum::routing::get(scan_handlers::show_form).post(scan_handlers::submit_scan),
        )
        .route("/ws", axum::routing::get(ws_handlers::ws_endpoint))
        .route(
            "/ops/health/live",
            axum::routing::get(ops_handlers::health_live),
        )
        .route(
            "/ops/health/ready",
            axum::routing::get(ops_handlers::health_ready),
        )
        .route(
            "/ops/metrics/prometheus",
            axum::routing::get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
