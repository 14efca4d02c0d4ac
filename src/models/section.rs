use serde::{Deserialize, Serialize};

/// A sidebar section, parsed from the display label the menu emits.
///
/// The menu contract is just "a short display label", so unrecognized labels
/// are preserved in `Other` and fall through to the no-selection prompt at
/// resolution time — they must never fail parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Section {
    Dashboard,
    UserManagement,
    Reports,
    Leads,
    Inquiries,
    InternshipExam,
    ProductCatalog,
    FbPostedProducts,
    Profile,
    Other(String),
}

impl Section {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Dashboard" => Section::Dashboard,
            "User Management" => Section::UserManagement,
            "Reports" => Section::Reports,
            "Leads" => Section::Leads,
            "Inquiries" => Section::Inquiries,
            "Internship Exam" => Section::InternshipExam,
            "Product Catalog" => Section::ProductCatalog,
            "FB Posted Products" => Section::FbPostedProducts,
            "Profile" => Section::Profile,
            other => Section::Other(other.to_string()),
        }
    }

    /// The display label, echoed back in the view response header.
    pub fn label(&self) -> &str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::UserManagement => "User Management",
            Section::Reports => "Reports",
            Section::Leads => "Leads",
            Section::Inquiries => "Inquiries",
            Section::InternshipExam => "Internship Exam",
            Section::ProductCatalog => "Product Catalog",
            Section::FbPostedProducts => "FB Posted Products",
            Section::Profile => "Profile",
            Section::Other(s) => s,
        }
    }
}

impl From<String> for Section {
    fn from(s: String) -> Self {
        Section::from_label(&s)
    }
}

impl From<Section> for String {
    fn from(s: Section) -> Self {
        s.label().to_string()
    }
}

// ── Tests ───────────────────────────────────────────────────────
