use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::approval::ApprovalStatus;
use crate::models::{Identity, Role, SessionContext};
use crate::shell::ShellView;
use crate::AppState;

// ── Request DTOs ─────────────────────────────────────────────

/// Session push from the auth provider. `user` is its name for the
/// identity record; all fields may be absent while the provider is still
/// resolving.
#[derive(Deserialize)]
pub struct SessionPayload {
    #[serde(default)]
    pub user: Option<Identity>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub loading: bool,
}

#[derive(Deserialize)]
pub struct SelectionPayload {
    pub selection: String,
}

// ── Handlers ─────────────────────────────────────────────────

/// PUT /api/v1/session — the auth provider pushes the current session.
/// A changed identity triggers an asynchronous approval fetch; the
/// response never waits for it.
pub async fn update_session(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SessionPayload>,
) -> StatusCode {
    let session = SessionContext {
        identity: payload.user,
        role: payload.role,
        loading: payload.loading,
    };

    let mut shell = state.shell.write().await;
    if let Some(id) = shell.set_session(session).await {
        let tracker = shell.tracker().clone();
        tokio::spawn(async move { tracker.refresh(&id).await });
    }
    StatusCode::NO_CONTENT
}

/// POST /api/v1/session/refresh — force a fresh approval fetch for the
/// active identity. Fire-and-forget: fetch failures surface only in the
/// logs, never here.
pub async fn refresh_approval(State(state): State<Arc<AppState>>) -> StatusCode {
    let shell = state.shell.read().await;
    let tracker = shell.tracker().clone();
    match tracker.current_identity_id().await {
        Some(id) => {
            tokio::spawn(async move { tracker.refresh(&id).await });
            StatusCode::ACCEPTED
        }
        None => StatusCode::NO_CONTENT,
    }
}

/// PUT /api/v1/selection — the sidebar pushes the selected section label.
pub async fn update_selection(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SelectionPayload>,
) -> StatusCode {
    state.shell.write().await.select(&payload.selection);
    StatusCode::NO_CONTENT
}

/// GET /api/v1/view — the rendering layer reads the current shell view.
pub async fn get_view(State(state): State<Arc<AppState>>) -> Json<ShellView> {
    Json(state.shell.read().await.view().await)
}

/// GET /api/v1/approval — approval lifecycle diagnostics.
pub async fn get_approval_status(State(state): State<Arc<AppState>>) -> Json<ApprovalStatus> {
    let shell = state.shell.read().await;
    let status = shell.tracker().status().await;
    Json(status)
}
