//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - Landing page
//! - `GET  /health`      - Health check: store reachability
//! - `POST /api/contact` - Lead submission
//! - `/static/*`         - Static assets (stylesheet, form script)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//!
//! Trailing-slash normalization is applied by [`crate::server::run`] around
//! the whole router, so tests can drive this router directly.

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer())
}
