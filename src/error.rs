//! Application error type and HTTP error envelope.
//!
//! Every error response uses the same JSON shape:
//!
//! ```json
//! { "error": { "code": "validation_error", "message": "...", "details": {} } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::application::services::SubmitError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Errors surfaced by HTTP handlers.
///
/// Only two kinds are part of the lead-capture contract: field validation
/// failures (recovered locally, per-field details) and the opaque submit
/// failure (single generic message, cause logged server-side). Everything
/// else is `Internal`.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    Submit,
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::Submit => (
                StatusCode::BAD_GATEWAY,
                "submit_error",
                "Could not send message. Please try again.".to_string(),
                json!({}),
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields = serde_json::Map::new();

        for (field, violations) in errors.field_errors() {
            let messages: Vec<Value> = violations
                .iter()
                .map(|e| {
                    e.message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                        .into()
                })
                .collect();
            fields.insert(field.to_string(), Value::Array(messages));
        }

        AppError::Validation {
            message: "Validation failed".to_string(),
            details: json!({ "fields": fields }),
        }
    }
}

impl From<SubmitError> for AppError {
    fn from(_: SubmitError) -> Self {
        AppError::Submit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LeadDraft;
    use validator::Validate;

    #[test]
    fn validation_errors_map_to_per_field_details() {
        let draft = LeadDraft {
            name: "J".to_string(),
            email: "not-an-email".to_string(),
            message: "short".to_string(),
        };

        let errors = draft.validate().unwrap_err();
        let app_error = AppError::from(errors);

        let AppError::Validation { details, .. } = app_error else {
            panic!("expected validation error");
        };

        let fields = details["fields"].as_object().unwrap();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("message"));
    }

    #[test]
    fn submit_error_is_opaque() {
        let app_error = AppError::from(SubmitError);
        assert!(matches!(app_error, AppError::Submit));
    }
}
