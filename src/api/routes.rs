//! API route configuration.

use axum::{Router, routing::post};

use crate::api::handlers::contact_handler;
use crate::state::AppState;

/// API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /contact` - submit one lead
pub fn routes() -> Router<AppState> {
    Router::new().route("/contact", post(contact_handler))
}
