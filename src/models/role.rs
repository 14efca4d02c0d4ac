use serde::{Deserialize, Serialize};

/// Access tiers assigned by the authentication provider.
/// Matches the `role` field on the session payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Staff,
    Intern,
    Client,
    /// Any role string we don't recognize. Carried through rather than
    /// rejected — unknown roles simply fail every role-gated rule.
    Other(String),
}

impl Role {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "admin" => Role::Admin,
            "staff" => Role::Staff,
            "intern" => Role::Intern,
            "client" => Role::Client,
            other => Role::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Intern => "intern",
            Role::Client => "client",
            Role::Other(s) => s,
        }
    }

    /// Label shown in the dashboard header greeting.
    /// Anything outside the staff tiers greets as a generic "User".
    pub fn display_label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Staff => "Staff",
            Role::Intern => "Intern",
            Role::Client | Role::Other(_) => "User",
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role::from_str(&s)
    }
}

impl From<Role> for String {
    fn from(r: Role) -> Self {
        r.as_str().to_string()
    }
}

// ── Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_str() {
        assert_eq!(Role::from_str("admin"), Role::Admin);
        assert_eq!(Role::from_str("Admin"), Role::Admin);
        assert_eq!(Role::from_str("staff"), Role::Staff);
        assert_eq!(Role::from_str("intern"), Role::Intern);
        assert_eq!(Role::from_str("client"), Role::Client);
        assert_eq!(Role::from_str("manager"), Role::Other("manager".into()));
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Role::Admin.display_label(), "Admin");
        assert_eq!(Role::Staff.display_label(), "Staff");
        assert_eq!(Role::Intern.display_label(), "Intern");
        assert_eq!(Role::Client.display_label(), "User");
        assert_eq!(Role::Other("manager".into()).display_label(), "User");
    }

    #[test]
    fn test_serde_round_trip_via_string() {
        let role: Role = serde_json::from_str("\"Intern\"").unwrap();
        assert_eq!(role, Role::Intern);
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"intern\"");

        let unknown: Role = serde_json::from_str("\"contractor\"").unwrap();
        assert_eq!(unknown, Role::Other("contractor".into()));
    }
}
