pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::history::handlers as history_handlers;
use crate::state::AppState;
use crate::transform::handlers as transform_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Transformation API
        .route(
            "/api/v1/transform",
            post(transform_handlers::handle_transform),
        )
        .route("/api/v1/correct", post(transform_handlers::handle_correct))
        .route("/api/v1/catalog", get(transform_handlers::handle_catalog))
        .route(
            "/api/v1/suggestions",
            get(transform_handlers::handle_get_suggestions)
                .delete(transform_handlers::handle_clear_suggestions),
        )
        // History API
        .route(
            "/api/v1/history",
            get(history_handlers::handle_list_history)
                .delete(history_handlers::handle_clear_history),
        )
        .route(
            "/api/v1/history/:id",
            delete(history_handlers::handle_remove_entry),
        )
        .with_state(state)
}
