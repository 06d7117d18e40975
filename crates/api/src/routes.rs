use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/blocked",
            get(handlers::get_blocked_table).post(handlers::post_blocked_table),
        )
        .with_state(state)
}
