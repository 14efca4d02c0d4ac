use serde::{Deserialize, Serialize};

use super::role::Role;

/// The authenticated user as supplied by the auth provider.
/// Only the fields this service consumes; everything else is the
/// provider's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
}

/// Read-only session state pushed by the authentication collaborator.
///
/// `loading` covers the window where the provider has not yet produced an
/// answer; while it is set, neither the tracker nor the resolver is
/// meaningfully consulted. `role` can lag `identity` (the provider looks it
/// up separately), so it stays optional even for a signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub identity: Option<Identity>,
    pub role: Option<Role>,
    pub loading: bool,
}

impl SessionContext {
    pub fn is_signed_in(&self) -> bool {
        self.identity.is_some()
    }
}

// ── Tests ───────────────────────────────────────────────────────
