pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/options", get(handlers::handle_options))
        // Conversation API
        .route("/api/v1/conversations", post(handlers::handle_create))
        .route(
            "/api/v1/conversations/:id",
            get(handlers::handle_get).delete(handlers::handle_end_session),
        )
        .route(
            "/api/v1/conversations/:id/profile",
            post(handlers::handle_submit_profile),
        )
        .route(
            "/api/v1/conversations/:id/start",
            post(handlers::handle_confirm_start),
        )
        .route(
            "/api/v1/conversations/:id/review",
            post(handlers::handle_review_info),
        )
        .route(
            "/api/v1/conversations/:id/messages",
            post(handlers::handle_message),
        )
        .route(
            "/api/v1/conversations/:id/reset",
            post(handlers::handle_reset),
        )
        .route(
            "/api/v1/conversations/:id/summary",
            get(handlers::handle_summary),
        )
        .with_state(state)
}
