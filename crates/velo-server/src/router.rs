use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handler::{self, AppState};

/// Build the axum router with all Velo endpoints over `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handler::health_handler))
        .route("/info", get(handler::info_handler))
        .route(
            "/items",
            get(handler::list_items).post(handler::create_item),
        )
        .route(
            "/items/:id",
            get(handler::get_item)
                .patch(handler::update_item)
                .delete(handler::delete_item),
        )
        .route("/users", post(handler::create_user))
        .route("/users/:id", get(handler::get_user))
        .route("/sessions/:id", get(handler::get_session))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
