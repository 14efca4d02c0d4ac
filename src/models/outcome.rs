use serde::{Deserialize, Serialize};

/// A renderable content view. These are opaque ids from the resolver's
/// perspective — the dashboard front-end maps them to actual components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Overview,
    UserManagement,
    Reports,
    Leads,
    Inquiries,
    InternshipExam,
    ProductCatalog,
    /// The "FB Posted Products" section renders the documents view.
    Documents,
    Profile,
}

/// The result of one resolution call.
///
/// Recomputed on every call, never persisted. Every (role, approved,
/// section) triple maps to exactly one of these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    /// Present the named content view.
    Render { view: View },
    /// Intern waiting on an admin to approve Leads access.
    PendingApproval,
    /// The role/section combination is disallowed.
    AccessDenied,
    /// Nothing (or nothing recognizable) is selected.
    NoSelection,
}

impl Outcome {
    /// The in-place message the rendering layer shows for non-view
    /// outcomes. `Render` carries no message — the view itself is shown.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Outcome::Render { .. } => None,
            Outcome::PendingApproval => Some(
                "Your account is pending approval. Please wait for an admin \
                 to approve your access to Leads.",
            ),
            Outcome::AccessDenied => Some("Access denied."),
            Outcome::NoSelection => Some("Select a section from the sidebar."),
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────
