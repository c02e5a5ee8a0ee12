use axum::{routing::get, Router};

use super::handlers;
use super::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .route("/result/:query_id", get(handlers::result))
        .route("/result/:query_id/report", get(handlers::report))
        .route("/stats", get(handlers::stats))
        .with_state(state)
}
