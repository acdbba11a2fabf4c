//! Store capability for lead persistence.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Lead;

/// Error raised by a lead store backend.
///
/// The submission pipeline never branches on the cause; it exists so the
/// failure can be logged before it collapses into the one generic submit
/// error shown to users.
#[derive(Debug, Error)]
#[error("lead store error: {0}")]
pub struct StoreError(String);

impl StoreError {
    pub fn new(cause: impl Into<String>) -> Self {
        Self(cause.into())
    }
}

/// Capability interface for the remote collaborator that persists leads.
///
/// The collaborator is opaque: one insert operation that either succeeds or
/// fails. Identity (row id, timestamps) is assigned by the store itself.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::RestLeadStore`] - hosted database REST endpoint
/// - [`crate::infrastructure::persistence::PgLeadStore`] - direct PostgreSQL table
/// - [`crate::infrastructure::persistence::MemoryLeadStore`] - in-process sink for tests and dry runs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Inserts one lead record into the logical `contacts` collection.
    ///
    /// Must perform exactly one write attempt; retries are the caller's
    /// decision (and the capture pipeline never retries).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] for any transport or store-side failure.
    async fn insert_lead(&self, lead: &Lead) -> Result<(), StoreError>;

    /// Reports whether the backing store is currently reachable.
    ///
    /// Used by the health endpoint; never called on the submission path.
    async fn health_check(&self) -> bool;

    /// Short backend label for logs and health output, e.g. `"postgres"`.
    fn kind(&self) -> &'static str;
}
