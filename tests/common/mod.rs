#![allow(dead_code)]

use std::sync::Arc;

use memotag_site::infrastructure::persistence::MemoryLeadStore;
use memotag_site::prelude::*;

/// State over a memory store that accepts every insert; the store handle is
/// returned so tests can assert on what reached it.
pub fn create_test_state() -> (AppState, Arc<MemoryLeadStore>) {
    let store = Arc::new(MemoryLeadStore::new());
    let state = AppState::new(Arc::new(LeadService::new(store.clone())));
    (state, store)
}

/// State over a memory store that rejects every insert.
pub fn create_failing_state() -> (AppState, Arc<MemoryLeadStore>) {
    let store = Arc::new(MemoryLeadStore::failing());
    let state = AppState::new(Arc::new(LeadService::new(store.clone())));
    (state, store)
}
