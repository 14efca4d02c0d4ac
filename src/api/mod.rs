use std::sync::Arc;

use axum::{
    http::StatusCode,
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub mod handlers;

/// Build the shell API router.
/// All routes are relative — the caller mounts this under `/api/v1`.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/session", put(handlers::update_session))
        .route("/session/refresh", post(handlers::refresh_approval))
        .route("/selection", put(handlers::update_selection))
        .route("/view", get(handlers::get_view))
        .route("/approval", get(handlers::get_approval_status))
        .layer(TraceLayer::new_for_http())
        .fallback(fallback_404)
}

async fn fallback_404() -> StatusCode {
    StatusCode::NOT_FOUND
}
