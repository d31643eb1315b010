//! In-memory company store.
//!
//! Mirrors the constraints of the `companies` table (primary key on `code`,
//! NOT NULL and UNIQUE on `name`) so handlers behave the same against it as
//! against PostgreSQL. Used by tests and local runs without a database.

use std::sync::RwLock;

use async_trait::async_trait;

use super::errors::{CompanyError, CompanyResult};
use super::model::{Company, CompanyChanges, CompanySummary, NewCompany};
use super::store::CompanyStore;

/// Vec-backed store; insertion order is the storage order
#[derive(Debug, Default)]
pub struct InMemoryCompanyStore {
    rows: RwLock<Vec<Company>>,
}

impl InMemoryCompanyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `rows`
    pub fn with_rows(rows: Vec<Company>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    /// Number of stored rows
    pub fn row_count(&self) -> CompanyResult<usize> {
        let rows = self.rows.read().map_err(|_| Self::poisoned())?;
        Ok(rows.len())
    }

    fn poisoned() -> CompanyError {
        CompanyError::Storage("Lock poisoned".to_string())
    }

    fn require_name(name: Option<String>) -> CompanyResult<String> {
        name.ok_or_else(|| {
            CompanyError::Constraint(
                "null value in column \"name\" violates not-null constraint".to_string(),
            )
        })
    }

    fn check_unique_name(rows: &[Company], name: &str, skip_code: Option<&str>) -> CompanyResult<()> {
        let taken = rows
            .iter()
            .any(|row| row.name == name && Some(row.code.as_str()) != skip_code);
        if taken {
            return Err(CompanyError::Conflict(format!(
                "duplicate key value violates unique constraint \"companies_name_key\" ({})",
                name
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl CompanyStore for InMemoryCompanyStore {
    async fn list(&self) -> CompanyResult<Vec<CompanySummary>> {
        let rows = self.rows.read().map_err(|_| Self::poisoned())?;
        Ok(rows.iter().map(CompanySummary::from).collect())
    }

    async fn find(&self, code: &str) -> CompanyResult<Option<Company>> {
        let rows = self.rows.read().map_err(|_| Self::poisoned())?;
        Ok(rows.iter().find(|row| row.code == code).cloned())
    }

    async fn insert(&self, company: NewCompany) -> CompanyResult<Company> {
        let code = company.code.ok_or_else(|| {
            CompanyError::Constraint(
                "null value in column \"code\" violates not-null constraint".to_string(),
            )
        })?;
        let name = Self::require_name(company.name)?;

        let mut rows = self.rows.write().map_err(|_| Self::poisoned())?;

        if rows.iter().any(|row| row.code == code) {
            return Err(CompanyError::Conflict(format!(
                "duplicate key value violates unique constraint \"companies_pkey\" ({})",
                code
            )));
        }
        Self::check_unique_name(&rows, &name, None)?;

        let row = Company {
            code,
            name,
            description: company.description,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, code: &str, changes: CompanyChanges) -> CompanyResult<Option<Company>> {
        let mut rows = self.rows.write().map_err(|_| Self::poisoned())?;

        // UPDATE ... WHERE code = $3 touches nothing when no row matches,
        // so constraints are only checked against an existing row.
        if !rows.iter().any(|row| row.code == code) {
            return Ok(None);
        }

        let name = Self::require_name(changes.name)?;
        Self::check_unique_name(&rows, &name, Some(code))?;

        let row = rows
            .iter_mut()
            .find(|row| row.code == code)
            .ok_or_else(|| CompanyError::Storage("row vanished under write lock".to_string()))?;
        row.name = name;
        row.description = changes.description;
        Ok(Some(row.clone()))
    }

    async fn delete(&self, code: &str) -> CompanyResult<bool> {
        let mut rows = self.rows.write().map_err(|_| Self::poisoned())?;

        let idx = match rows.iter().position(|row| row.code == code) {
            Some(idx) => idx,
            None => return Ok(false),
        };
        rows.remove(idx);
        Ok(true)
    }
}
