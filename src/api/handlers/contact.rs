//! Handler for the lead capture endpoint.

use axum::{Json, extract::State};

use crate::api::dto::contact::{ContactRequest, ContactResponse};
use crate::domain::{Lead, LeadDraft};
use crate::error::AppError;
use crate::state::AppState;

/// Accepts one lead submission.
///
/// # Endpoint
///
/// `POST /api/contact`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Jo",
///   "email": "jo@example.com",
///   "message": "Hello there, I have a question."
/// }
/// ```
///
/// # Responses
///
/// - **200 OK** `{"status": "accepted"}` - the store accepted the record
/// - **400 Bad Request** - one or more fields failed validation; the error
///   details carry one message list per offending field and nothing was sent
///   to the store
/// - **502 Bad Gateway** - the store write failed; a single generic message,
///   regardless of cause
pub async fn contact_handler(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    let lead = Lead::try_from(LeadDraft::from(payload))?;

    state.lead_service.submit(lead).await?;

    Ok(Json(ContactResponse::accepted()))
}
