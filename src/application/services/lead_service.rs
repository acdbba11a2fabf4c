//! Lead submission service.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::{Lead, LeadStore};

/// The single error a failed submission collapses into.
///
/// Transport errors, store rejections, and timeouts are indistinguishable to
/// callers; the underlying cause is only logged for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("lead submission failed")]
pub struct SubmitError;

/// Service that delivers validated leads to the configured store.
///
/// Performs exactly one write per call. No retries, no queueing, no
/// deduplication.
pub struct LeadService {
    store: Arc<dyn LeadStore>,
}

impl LeadService {
    /// Creates a new service over a store backend.
    pub fn new(store: Arc<dyn LeadStore>) -> Self {
        Self { store }
    }

    /// Submits one lead to the store.
    ///
    /// The caller must only pass leads that already passed validation;
    /// [`Lead`] can only be constructed from a validated draft, so the
    /// type enforces the precondition.
    ///
    /// # Errors
    ///
    /// Returns the opaque [`SubmitError`] on any store failure. The cause is
    /// logged at `warn` level and counted, never returned.
    pub async fn submit(&self, lead: Lead) -> Result<(), SubmitError> {
        match self.store.insert_lead(&lead).await {
            Ok(()) => {
                tracing::info!(store = self.store.kind(), "lead accepted");
                metrics::counter!("leads_submitted_total").increment(1);
                Ok(())
            }
            Err(cause) => {
                tracing::warn!(store = self.store.kind(), error = %cause, "lead submission failed");
                metrics::counter!("leads_failed_total").increment(1);
                Err(SubmitError)
            }
        }
    }

    /// Probes the store backend for the health endpoint.
    pub async fn store_healthy(&self) -> bool {
        self.store.health_check().await
    }

    /// Label of the configured store backend.
    pub fn store_kind(&self) -> &'static str {
        self.store.kind()
    }
}
