use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Call initiation (avatar widget handshake)
        .route("/start_call", post(handlers::start_call))
        // Provider catalogue
        .route("/api/ultravox-voices", get(handlers::list_voices))
        // Typed questions to the assistant
        .route("/api/cynthia-answer", post(handlers::answer_question))
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
