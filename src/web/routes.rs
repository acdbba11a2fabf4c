//! Marketing page routes.

use axum::{Router, routing::get};

use crate::state::AppState;
use crate::web::handlers::home_handler;

/// Public pages.
///
/// # Endpoints
///
/// - `GET /` - landing page
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(home_handler))
}
