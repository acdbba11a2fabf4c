//! In-process lead sink for tests and `leadctl --dry-run`.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Lead, LeadStore, StoreError};

/// Lead store that keeps records in memory.
///
/// The failing variant rejects every insert, for exercising the error path
/// without a network.
pub struct MemoryLeadStore {
    leads: Mutex<Vec<Lead>>,
    fail: bool,
}

impl MemoryLeadStore {
    /// Store that accepts every insert.
    pub fn new() -> Self {
        Self {
            leads: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Store that rejects every insert.
    pub fn failing() -> Self {
        Self {
            leads: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Number of accepted leads.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the accepted leads, oldest first.
    pub fn leads(&self) -> Vec<Lead> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Lead>> {
        self.leads.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MemoryLeadStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LeadStore for MemoryLeadStore {
    async fn insert_lead(&self, lead: &Lead) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::new("memory store configured to fail"));
        }
        self.lock().push(lead.clone());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        !self.fail
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead() -> Lead {
        Lead {
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            message: "Hello there, I have a question.".to_string(),
        }
    }

    #[tokio::test]
    async fn accepts_and_records_inserts() {
        let store = MemoryLeadStore::new();
        store.insert_lead(&lead()).await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.leads()[0].email, "jo@example.com");
        assert!(store.health_check().await);
    }

    #[tokio::test]
    async fn failing_store_rejects_inserts() {
        let store = MemoryLeadStore::failing();
        let result = store.insert_lead(&lead()).await;

        assert!(result.is_err());
        assert!(store.is_empty());
        assert!(!store.health_check().await);
    }
}
