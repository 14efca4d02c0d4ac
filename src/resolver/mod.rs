//! View resolution engine.
//!
//! Maps (role, approval flag, selected section) to the view or notice the
//! dashboard should render. The mapping is an ordered table of named rules;
//! each rule is checked in order and the first one that produces an outcome
//! wins. Order matters: roles and sections overlap (e.g. "Leads" is both a
//! staff page and the intern-gated section), so the specific gates sit above
//! the generic section table.
//!
//! The engine is a pure function of its inputs — no hidden state, total over
//! every input including unrecognized roles and section labels.

use crate::models::{Outcome, Role, Section, View};

/// Inputs to one resolution call.
#[derive(Debug, Clone, Copy)]
pub struct ResolveRequest<'a> {
    pub role: &'a Role,
    pub approved: bool,
    pub section: &'a Section,
}

/// A single condition→outcome rule. Returning `None` passes evaluation to
/// the next rule in the table.
struct AccessRule {
    name: &'static str,
    decide: fn(&ResolveRequest<'_>) -> Option<Outcome>,
}

/// The rule table, in precedence order. The last rule is a catch-all.
static RULES: &[AccessRule] = &[
    AccessRule {
        name: "admin-console",
        decide: admin_console,
    },
    AccessRule {
        name: "overview",
        decide: overview,
    },
    AccessRule {
        name: "leads-gate",
        decide: leads_gate,
    },
    AccessRule {
        name: "staff-pages",
        decide: staff_pages,
    },
    AccessRule {
        name: "section-table",
        decide: section_table,
    },
];

/// Resolve a (role, approved, section) triple to its outcome.
pub fn resolve(role: &Role, approved: bool, section: &Section) -> Outcome {
    let req = ResolveRequest {
        role,
        approved,
        section,
    };

    for rule in RULES {
        if let Some(outcome) = (rule.decide)(&req) {
            tracing::debug!(
                rule = rule.name,
                role = role.as_str(),
                section = section.label(),
                outcome = ?outcome,
                "view resolved"
            );
            return outcome;
        }
    }

    // The table ends with a catch-all, so evaluation cannot get here; the
    // fallback keeps the function total without a panic path.
    Outcome::NoSelection
}

// ── Rules ────────────────────────────────────────────────────

/// User Management and Reports exist only in the admin console. For any
/// other role the selection falls through — there is no admin-flavored
/// denial, just whatever the later rules make of it.
fn admin_console(req: &ResolveRequest<'_>) -> Option<Outcome> {
    if *req.role != Role::Admin {
        return None;
    }
    match req.section {
        Section::UserManagement => Some(Outcome::Render {
            view: View::UserManagement,
        }),
        Section::Reports => Some(Outcome::Render {
            view: View::Reports,
        }),
        _ => None,
    }
}

/// The "Dashboard" entry shows the overview to every role except client.
fn overview(req: &ResolveRequest<'_>) -> Option<Outcome> {
    if *req.role != Role::Client && *req.section == Section::Dashboard {
        return Some(Outcome::Render {
            view: View::Overview,
        });
    }
    None
}

/// Leads access control — the one rule with an asynchronous dependency.
///
/// Admin and staff always pass. Interns are gated on the approval flag the
/// tracker maintains: unapproved interns see the pending notice until an
/// admin flips the flag upstream and a later fetch observes it. Everyone
/// else is denied outright.
fn leads_gate(req: &ResolveRequest<'_>) -> Option<Outcome> {
    if *req.section != Section::Leads {
        return None;
    }
    Some(match req.role {
        Role::Admin | Role::Staff => Outcome::Render { view: View::Leads },
        Role::Intern if req.approved => Outcome::Render { view: View::Leads },
        Role::Intern => Outcome::PendingApproval,
        _ => Outcome::AccessDenied,
    })
}

/// Inquiries and the internship exam are open to every non-client role.
fn staff_pages(req: &ResolveRequest<'_>) -> Option<Outcome> {
    if *req.role == Role::Client {
        return None;
    }
    match req.section {
        Section::Inquiries => Some(Outcome::Render {
            view: View::Inquiries,
        }),
        Section::InternshipExam => Some(Outcome::Render {
            view: View::InternshipExam,
        }),
        _ => None,
    }
}

/// Catch-all: the role-independent sections, then the no-selection prompt
/// for anything unrecognized (including sections a role-gated rule above
/// declined to claim).
fn section_table(req: &ResolveRequest<'_>) -> Option<Outcome> {
    Some(match req.section {
        Section::ProductCatalog => Outcome::Render {
            view: View::ProductCatalog,
        },
        Section::FbPostedProducts => Outcome::Render {
            view: View::Documents,
        },
        Section::Profile => Outcome::Render {
            view: View::Profile,
        },
        _ => Outcome::NoSelection,
    })
}

// ── Tests ────────────────────────────────────────────────────
