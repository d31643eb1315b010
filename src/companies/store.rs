//! # Company Store
//!
//! The storage collaborator behind the companies resource. Each method maps
//! to one parameterized statement (delete maps to a check and a delete run
//! atomically).

use async_trait::async_trait;

use super::errors::CompanyResult;
use super::model::{Company, CompanyChanges, CompanySummary, NewCompany};

/// Storage trait for company rows
#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// `SELECT code, name FROM companies`, in storage order
    async fn list(&self) -> CompanyResult<Vec<CompanySummary>>;

    /// Full row for `code`, if any
    async fn find(&self, code: &str) -> CompanyResult<Option<Company>>;

    /// Insert a row and return it as stored
    async fn insert(&self, company: NewCompany) -> CompanyResult<Company>;

    /// Overwrite `name` and `description` for `code`.
    ///
    /// Returns `None` when no row matched.
    async fn update(&self, code: &str, changes: CompanyChanges) -> CompanyResult<Option<Company>>;

    /// Check that `code` exists, then remove it.
    ///
    /// Returns `false` when the check found nothing.
    async fn delete(&self, code: &str) -> CompanyResult<bool>;
}
