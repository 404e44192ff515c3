pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::pipeline::handlers as pipeline_handlers;
use crate::scoring::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/scoring/categories",
            get(handlers::handle_list_categories),
        )
        .route("/api/v1/scoring/score", post(handlers::handle_score))
        .route("/api/v1/scoring/compare", post(handlers::handle_compare))
        .route(
            "/api/v1/pipeline/summary",
            post(pipeline_handlers::handle_pipeline_summary),
        )
        .fallback(not_found)
        .with_state(state)
}
