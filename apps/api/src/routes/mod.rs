pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::letter::handlers;
use crate::state::AppState;

/// Router plus the HTTP layers every deployment runs with: request tracing
/// and CORS open to any origin.
pub fn build_app(state: AppState) -> Router {
    build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    )
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Letter API
        .route("/api/generate", post(handlers::handle_generate))
        .route("/api/improve", post(handlers::handle_improve))
        .route("/api/feedback", post(handlers::handle_feedback))
        .with_state(state)
}
