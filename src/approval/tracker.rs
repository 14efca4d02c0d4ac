//! Approval state tracking for the active identity.
//!
//! Holds the single mutable datum in the system: the current identity's
//! approval flag, defaulting to "not approved" until a fetch against the
//! remote service succeeds. The fetch is split into two phases — request
//! the flag for an id, then apply the result only if that id is still the
//! active identity — so a slow response for a superseded identity can never
//! clobber the newer identity's state.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

use super::client::ApprovalLookup;
use crate::models::Identity;

/// Snapshot of the tracked state, as read by the render path and the
/// diagnostics endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ApprovalStatus {
    pub identity_id: Option<String>,
    pub approved: bool,
    pub last_refreshed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default)]
struct TrackerState {
    identity_id: Option<String>,
    approved: bool,
    last_refreshed_at: Option<DateTime<Utc>>,
}

pub struct ApprovalTracker {
    state: RwLock<TrackerState>,
    lookup: Arc<dyn ApprovalLookup>,
}

impl ApprovalTracker {
    pub fn new(lookup: Arc<dyn ApprovalLookup>) -> Self {
        Self {
            state: RwLock::new(TrackerState::default()),
            lookup,
        }
    }

    /// Point the tracker at the (possibly absent) active identity.
    ///
    /// Returns the id a fetch should be issued for, if any. With no
    /// identity the flag is held at its default and no request goes out.
    /// A changed identity resets the flag to the default before its fetch
    /// lands; re-announcing the same identity keeps the current flag and
    /// just forces another fetch attempt.
    pub async fn on_identity_change(&self, identity: Option<&Identity>) -> Option<String> {
        let mut state = self.state.write().await;
        match identity {
            None => {
                *state = TrackerState::default();
                None
            }
            Some(identity) => {
                if state.identity_id.as_deref() != Some(identity.id.as_str()) {
                    state.approved = false;
                    state.last_refreshed_at = None;
                }
                state.identity_id = Some(identity.id.clone());
                Some(identity.id.clone())
            }
        }
    }

    /// Fetch the approval flag for `user_id` and apply the result.
    ///
    /// Best-effort by contract: transport failures and malformed payloads
    /// are logged and the current flag is retained. There is no retry —
    /// the next identity-change, forced refresh, or periodic tick is a
    /// fresh attempt.
    pub async fn refresh(&self, user_id: &str) {
        match self.lookup.fetch(user_id).await {
            Ok(resp) => match resp.approved() {
                Some(approved) => self.apply_result(user_id, approved).await,
                None => {
                    tracing::warn!(
                        identity_id = %user_id,
                        "approval response carried no user record; keeping current flag"
                    );
                }
            },
            Err(e) => {
                tracing::warn!(
                    identity_id = %user_id,
                    error = %e,
                    "approval fetch failed; keeping current flag"
                );
            }
        }
    }

    /// Second phase of a fetch: applied only while `user_id` still names
    /// the active identity. Results for a superseded identity are
    /// discarded.
    pub async fn apply_result(&self, user_id: &str, approved: bool) {
        let mut state = self.state.write().await;
        if state.identity_id.as_deref() != Some(user_id) {
            tracing::debug!(
                identity_id = %user_id,
                "discarding stale approval result for superseded identity"
            );
            return;
        }
        state.approved = approved;
        state.last_refreshed_at = Some(Utc::now());
    }

    /// `on_identity_change` followed by an immediate fetch, in one call.
    pub async fn sync(&self, identity: Option<&Identity>) {
        if let Some(id) = self.on_identity_change(identity).await {
            self.refresh(&id).await;
        }
    }

    pub async fn approved(&self) -> bool {
        self.state.read().await.approved
    }

    pub async fn current_identity_id(&self) -> Option<String> {
        self.state.read().await.identity_id.clone()
    }

    pub async fn status(&self) -> ApprovalStatus {
        let state = self.state.read().await;
        ApprovalStatus {
            identity_id: state.identity_id.clone(),
            approved: state.approved,
            last_refreshed_at: state.last_refreshed_at,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────
