//! Company records and request payloads.

use serde::{Deserialize, Serialize};

/// A full company row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Company {
    /// Unique, immutable lookup key
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// The projection returned by the list endpoint (no description)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

impl From<&Company> for CompanySummary {
    fn from(company: &Company) -> Self {
        Self {
            code: company.code.clone(),
            name: company.name.clone(),
        }
    }
}

/// Body accepted by create: `{code, name, description}`.
///
/// Fields are optional here; required columns are enforced by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewCompany {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body accepted by update: `{name, description}`.
///
/// A `code` key in the body is ignored. Missing keys overwrite the column
/// with NULL, same as the UPDATE statement binding an absent value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CompanyChanges {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
