//! PostgreSQL backend for deployments writing to their own database.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Lead, LeadStore, StoreError};

/// Lead store writing directly into a `contacts` table.
///
/// The table is owned by this crate (see `migrations/`); `id` and
/// `created_at` are assigned by the database on insert.
pub struct PgLeadStore {
    pool: Arc<PgPool>,
}

impl PgLeadStore {
    /// Creates a new store over a connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeadStore for PgLeadStore {
    async fn insert_lead(&self, lead: &Lead) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO contacts (name, email, message) VALUES ($1, $2, $3)")
            .bind(&lead.name)
            .bind(&lead.email)
            .bind(&lead.message)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| StoreError::new(e.to_string()))?;

        Ok(())
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }

    fn kind(&self) -> &'static str {
        "postgres"
    }
}
