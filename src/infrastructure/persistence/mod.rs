//! Lead store backends.
//!
//! The backend is chosen once at startup from configuration; all of them
//! satisfy [`crate::domain::LeadStore`] and the rest of the crate never
//! knows which one is running.

pub mod memory_lead_store;
pub mod pg_lead_store;
pub mod rest_lead_store;

pub use memory_lead_store::MemoryLeadStore;
pub use pg_lead_store::PgLeadStore;
pub use rest_lead_store::RestLeadStore;
