//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LeadService;

/// State shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub lead_service: Arc<LeadService>,
}

impl AppState {
    pub fn new(lead_service: Arc<LeadService>) -> Self {
        Self { lead_service }
    }
}
