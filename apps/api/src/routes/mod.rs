pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::keywords::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/extract-keywords",
            post(handlers::handle_extract_keywords),
        )
        .with_state(state)
}
