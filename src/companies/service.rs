//! # Company Service
//!
//! The five company operations expressed over plain inputs. Bodies arrive
//! already decoded; `None` means the request carried no body at all.

use std::sync::Arc;

use super::errors::{CompanyError, CompanyResult};
use super::model::{Company, CompanyChanges, CompanySummary, NewCompany};
use super::store::CompanyStore;

const MISSING_COMPANY: &str = "Missing company information.";
const CODE_NOT_FOUND: &str = "Company code does not exist.";
const COMPANY_NOT_FOUND: &str = "Company does not exist.";

/// Company operations over an injected store
pub struct CompanyService<S: CompanyStore> {
    store: Arc<S>,
}

impl<S: CompanyStore> Clone for CompanyService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: CompanyStore> CompanyService<S> {
    pub fn new(store: S) -> Self {
        Self::from_shared(Arc::new(store))
    }

    /// Build over a store the caller keeps a handle to
    pub fn from_shared(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Every company's code and name
    pub async fn list(&self) -> CompanyResult<Vec<CompanySummary>> {
        let companies = self.store.list().await?;
        tracing::debug!(count = companies.len(), "listed companies");
        Ok(companies)
    }

    /// The full record for `code`
    pub async fn get(&self, code: &str) -> CompanyResult<Company> {
        self.store
            .find(code)
            .await?
            .ok_or_else(|| CompanyError::NotFound(CODE_NOT_FOUND.to_string()))
    }

    /// Insert a company; uniqueness is left to the store
    pub async fn create(&self, body: Option<NewCompany>) -> CompanyResult<Company> {
        let new = body.ok_or_else(|| CompanyError::BadRequest(MISSING_COMPANY.to_string()))?;
        let company = self.store.insert(new).await?;
        tracing::debug!(code = %company.code, "created company");
        Ok(company)
    }

    /// Overwrite name and description of `code`
    pub async fn update(&self, code: &str, body: Option<CompanyChanges>) -> CompanyResult<Company> {
        let changes = body.ok_or_else(|| CompanyError::BadRequest(MISSING_COMPANY.to_string()))?;
        let company = self
            .store
            .update(code, changes)
            .await?
            .ok_or_else(|| CompanyError::NotFound(COMPANY_NOT_FOUND.to_string()))?;
        tracing::debug!(code = %company.code, "updated company");
        Ok(company)
    }

    /// Remove `code` after confirming it exists
    pub async fn delete(&self, code: &str) -> CompanyResult<()> {
        if !self.store.delete(code).await? {
            return Err(CompanyError::NotFound(CODE_NOT_FOUND.to_string()));
        }
        tracing::debug!(code, "deleted company");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::companies::memory::InMemoryCompanyStore;

    fn create_test_service() -> CompanyService<InMemoryCompanyStore> {
        CompanyService::new(InMemoryCompanyStore::with_rows(vec![Company {
            code: "apple".to_string(),
            name: "Apple Computer".to_string(),
            description: Some("Maker of OSX.".to_string()),
        }]))
    }

    fn ibm() -> NewCompany {
        NewCompany {
            code: Some("ibm".to_string()),
            name: Some("IBM".to_string()),
            description: Some("Tech".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let service = create_test_service();

        let created = service.create(Some(ibm())).await.unwrap();
        let fetched = service.get("ibm").await.unwrap();
        assert_eq!(created, fetched);
        assert_eq!(fetched.description.as_deref(), Some("Tech"));
    }

    #[tokio::test]
    async fn test_create_without_body_touches_nothing() {
        let service = create_test_service();

        let err = service.create(None).await.unwrap_err();
        assert_eq!(
            err,
            CompanyError::BadRequest("Missing company information.".to_string())
        );
        assert_eq!(service.store().row_count().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_unknown_code() {
        let service = create_test_service();
        let err = service.get("doesnotexist").await.unwrap_err();
        assert!(matches!(err, CompanyError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_unknown_code_leaves_storage_unchanged() {
        let service = create_test_service();

        let err = service
            .update(
                "nope",
                Some(CompanyChanges {
                    name: Some("Nope".to_string()),
                    description: None,
                }),
            )
            .await
            .unwrap_err();
        assert_eq!(
            err,
            CompanyError::NotFound("Company does not exist.".to_string())
        );
        assert_eq!(service.store().row_count().unwrap(), 1);
        assert_eq!(service.get("apple").await.unwrap().name, "Apple Computer");
    }

    #[tokio::test]
    async fn test_update_absent_body_is_bad_request() {
        let service = create_test_service();
        let err = service.update("apple", None).await.unwrap_err();
        assert!(matches!(err, CompanyError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_update_empty_object_reaches_the_store() {
        let service = create_test_service();

        // Both columns are bound as NULL; the NOT NULL name column rejects it.
        let err = service
            .update("apple", Some(CompanyChanges::default()))
            .await
            .unwrap_err();
        assert!(matches!(err, CompanyError::Constraint(_)));
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let service = create_test_service();

        service.delete("apple").await.unwrap();
        assert!(matches!(
            service.get("apple").await,
            Err(CompanyError::NotFound(_))
        ));
        assert!(matches!(
            service.delete("apple").await,
            Err(CompanyError::NotFound(_))
        ));
    }
}
