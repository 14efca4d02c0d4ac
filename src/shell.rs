//! The dashboard shell: session context + section selection + tracked
//! approval, combined into the view the front-end renders.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::approval::ApprovalTracker;
use crate::models::{Outcome, Role, Section, SessionContext};
use crate::resolver;

/// Stand-in role for an authenticated session whose role hasn't been
/// assigned (or looked up) yet. Resolves like any unrecognized role.
static UNASSIGNED_ROLE: Lazy<Role> = Lazy::new(|| Role::Other("unassigned".into()));

/// Header greeting shown above the content area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeting {
    pub role_label: &'static str,
    pub email: String,
}

/// What the rendering layer sees. Serialized as the `/view` response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ShellView {
    /// The auth provider hasn't produced a session yet — show a loading
    /// indicator, nothing else.
    Loading,
    /// Loading finished with nobody signed in. Redirecting to the sign-in
    /// page is the caller's concern.
    SignedOut,
    Ready {
        selected: String,
        greeting: Greeting,
        outcome: Outcome,
        /// In-place message for the non-view outcomes.
        #[serde(skip_serializing_if = "Option::is_none")]
        notice: Option<&'static str>,
    },
}

/// Shell state for the active session. One per service instance — the
/// dashboard is a single-user surface.
pub struct DashboardShell {
    session: SessionContext,
    selected: Section,
    tracker: Arc<ApprovalTracker>,
}

impl DashboardShell {
    pub fn new(tracker: Arc<ApprovalTracker>) -> Self {
        Self {
            session: SessionContext {
                identity: None,
                role: None,
                loading: true,
            },
            selected: Section::Dashboard,
            tracker,
        }
    }

    /// Replace the session context and re-aim the tracker at its identity.
    ///
    /// Returns the identity id a fresh approval fetch should be issued
    /// for, if any; the caller decides whether to await it or spawn it.
    pub async fn set_session(&mut self, session: SessionContext) -> Option<String> {
        let fetch_target = self
            .tracker
            .on_identity_change(session.identity.as_ref())
            .await;
        self.session = session;
        fetch_target
    }

    /// Record the sidebar selection.
    pub fn select(&mut self, label: &str) {
        self.selected = Section::from_label(label);
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn selected(&self) -> &Section {
        &self.selected
    }

    pub fn tracker(&self) -> &Arc<ApprovalTracker> {
        &self.tracker
    }

    /// Compute the view for the current (session, approval, selection).
    pub async fn view(&self) -> ShellView {
        if self.session.loading {
            return ShellView::Loading;
        }
        let Some(identity) = &self.session.identity else {
            return ShellView::SignedOut;
        };

        let role = self.session.role.as_ref().unwrap_or(&UNASSIGNED_ROLE);
        let approved = self.tracker.approved().await;
        let outcome = resolver::resolve(role, approved, &self.selected);

        ShellView::Ready {
            selected: self.selected.label().to_string(),
            greeting: Greeting {
                role_label: role.display_label(),
                email: identity.email.clone(),
            },
            outcome,
            notice: outcome.notice(),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::approval::{ApprovalLookup, ApprovalResponse};
    use crate::errors::AppError;
    use crate::models::{Identity, View};

    /// Lookup double for tests that drive the tracker through
    /// `apply_result` and never issue real fetches.
    struct NeverLookup;

    #[async_trait]
    impl ApprovalLookup for NeverLookup {
        async fn fetch(&self, _user_id: &str) -> Result<ApprovalResponse, AppError> {
            panic!("shell tests should not fetch");
        }
    }

    fn shell() -> DashboardShell {
        DashboardShell::new(Arc::new(ApprovalTracker::new(Arc::new(NeverLookup))))
    }

    fn signed_in(id: &str, email: &str, role: Option<Role>) -> SessionContext {
        SessionContext {
            identity: Some(Identity {
                id: id.to_string(),
                email: email.to_string(),
            }),
            role,
            loading: false,
        }
    }

    #[tokio::test]
    async fn test_starts_loading() {
        assert_eq!(shell().view().await, ShellView::Loading);
    }

    #[tokio::test]
    async fn test_signed_out_after_loading() {
        let mut shell = shell();
        shell
            .set_session(SessionContext {
                identity: None,
                role: None,
                loading: false,
            })
            .await;
        assert_eq!(shell.view().await, ShellView::SignedOut);
    }

    #[tokio::test]
    async fn test_default_selection_is_dashboard() {
        let mut shell = shell();
        shell
            .set_session(signed_in("u-1", "staff@example.com", Some(Role::Staff)))
            .await;

        match shell.view().await {
            ShellView::Ready {
                selected,
                greeting,
                outcome,
                notice,
            } => {
                assert_eq!(selected, "Dashboard");
                assert_eq!(greeting.role_label, "Staff");
                assert_eq!(greeting.email, "staff@example.com");
                assert_eq!(
                    outcome,
                    Outcome::Render {
                        view: View::Overview
                    }
                );
                assert!(notice.is_none());
            }
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_intern_leads_unlocks_on_approval() {
        let mut shell = shell();
        let target = shell
            .set_session(signed_in("u-7", "intern@example.com", Some(Role::Intern)))
            .await;
        assert_eq!(target.as_deref(), Some("u-7"));

        shell.select("Leads");
        match shell.view().await {
            ShellView::Ready { outcome, notice, .. } => {
                assert_eq!(outcome, Outcome::PendingApproval);
                assert!(notice.unwrap().contains("pending approval"));
            }
            other => panic!("expected Ready, got {:?}", other),
        }

        // The admin approves upstream; the next fetch observes it.
        shell.tracker().apply_result("u-7", true).await;
        match shell.view().await {
            ShellView::Ready { outcome, .. } => {
                assert_eq!(outcome, Outcome::Render { view: View::Leads })
            }
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_role_greets_as_generic_user() {
        let mut shell = shell();
        shell
            .set_session(signed_in("u-2", "new@example.com", None))
            .await;

        match shell.view().await {
            ShellView::Ready { greeting, outcome, .. } => {
                assert_eq!(greeting.role_label, "User");
                // An unassigned role is not a client, so the overview
                // still renders.
                assert_eq!(
                    outcome,
                    Outcome::Render {
                        view: View::Overview
                    }
                );
            }
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_selection_prompts() {
        let mut shell = shell();
        shell
            .set_session(signed_in("u-3", "a@example.com", Some(Role::Admin)))
            .await;
        shell.select("Settings");

        match shell.view().await {
            ShellView::Ready { outcome, .. } => assert_eq!(outcome, Outcome::NoSelection),
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_ready_serialization_shape() {
        let mut shell = shell();
        shell
            .set_session(signed_in("u-4", "c@example.com", Some(Role::Client)))
            .await;
        shell.select("Leads");

        let json = serde_json::to_value(shell.view().await).unwrap();
        assert_eq!(json["state"], "ready");
        assert_eq!(json["selected"], "Leads");
        assert_eq!(json["greeting"]["role_label"], "User");
        assert_eq!(json["outcome"]["type"], "access_denied");
        assert_eq!(json["notice"], "Access denied.");
    }
}
