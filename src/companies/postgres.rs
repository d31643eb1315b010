//! PostgreSQL company store backed by a `sqlx` connection pool.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;

use super::errors::CompanyResult;
use super::model::{Company, CompanyChanges, CompanySummary, NewCompany};
use super::store::CompanyStore;

/// Pooled PostgreSQL store. Cloning shares the pool.
#[derive(Debug, Clone)]
pub struct PgCompanyStore {
    pool: PgPool,
}

impl PgCompanyStore {
    /// Wrap an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool and verify one connection can be established
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url)
            .await?;
        tracing::info!(
            max_connections = config.max_connections,
            "database pool ready"
        );
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CompanyStore for PgCompanyStore {
    async fn list(&self) -> CompanyResult<Vec<CompanySummary>> {
        let rows = sqlx::query_as::<_, CompanySummary>(
            "SELECT code, name
               FROM companies",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find(&self, code: &str) -> CompanyResult<Option<Company>> {
        let row = sqlx::query_as::<_, Company>(
            "SELECT code, name, description
               FROM companies
              WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, company: NewCompany) -> CompanyResult<Company> {
        let row = sqlx::query_as::<_, Company>(
            "INSERT INTO companies (code, name, description)
                  VALUES ($1, $2, $3)
               RETURNING code, name, description",
        )
        .bind(company.code)
        .bind(company.name)
        .bind(company.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, code: &str, changes: CompanyChanges) -> CompanyResult<Option<Company>> {
        let row = sqlx::query_as::<_, Company>(
            "UPDATE companies
                SET name = $1,
                    description = $2
              WHERE code = $3
             RETURNING code, name, description",
        )
        .bind(changes.name)
        .bind(changes.description)
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, code: &str) -> CompanyResult<bool> {
        // The row lock keeps a concurrent delete from slipping in between
        // the existence check and the DELETE.
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_scalar::<_, String>(
            "SELECT code
               FROM companies
              WHERE code = $1
                FOR UPDATE",
        )
        .bind(code)
        .fetch_optional(&mut *tx)
        .await?;

        if existing.is_none() {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query("DELETE FROM companies WHERE code = $1")
            .bind(code)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(true)
    }
}
