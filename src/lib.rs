//! # MemoTag Site
//!
//! Marketing site and lead capture service for the MemoTag dementia-care
//! platform, built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The lead entity, its validation rules,
//!   and the store capability trait
//! - **Application Layer** ([`application`]) - The submission service and the
//!   form flow state machine
//! - **Infrastructure Layer** ([`infrastructure`]) - Store backends: hosted
//!   REST, PostgreSQL, in-memory
//! - **API Layer** ([`api`]) - The contact and health endpoints
//! - **Web Layer** ([`web`]) - Server-rendered marketing pages
//!
//! ## Quick Start
//!
//! ```bash
//! # Point the service at the hosted store
//! export CONTACT_STORE_URL="https://abc.supabase.co"
//! export CONTACT_STORE_KEY="service-role-key"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod web;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for the binaries and
/// integration tests.
pub mod prelude {
    pub use crate::application::services::{LeadService, SubmitError};
    pub use crate::application::submission::{SubmissionFlow, SubmissionStatus, SubmitOutcome};
    pub use crate::domain::{Lead, LeadDraft, LeadStore};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
