//! Core domain types: the lead entity and the store capability.

pub mod lead;
pub mod store;

pub use lead::{Lead, LeadDraft};
pub use store::{LeadStore, StoreError};

#[cfg(test)]
pub use store::MockLeadStore;
