//! DTOs for the contact endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::LeadDraft;

/// Request body for `POST /api/contact`.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<ContactRequest> for LeadDraft {
    fn from(request: ContactRequest) -> Self {
        LeadDraft {
            name: request.name,
            email: request.email,
            message: request.message,
        }
    }
}

/// Response body once the store has accepted the record.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub status: &'static str,
}

impl ContactResponse {
    pub fn accepted() -> Self {
        Self { status: "accepted" }
    }
}
