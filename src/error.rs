//! Uniform error bodies for the whole HTTP surface.
//!
//! Three tiers: routing-level HTTP errors keep their own status code,
//! validation failures always collapse to 422, and anything unexpected
//! always collapses to a generic 500 while the detail stays server-side.
//! Every tier logs before the response leaves.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Routing-level HTTP error; status maps straight through.
    #[error("HTTP {status}: {detail}")]
    Http {
        status: StatusCode,
        detail: String,
        path: String,
    },

    /// Request parameters failed validation.
    #[error("invalid request parameters")]
    Validation { details: serde_json::Value },

    /// Anything unexpected. The message is logged, never sent to the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(path: &str) -> Self {
        Self::Http {
            status: StatusCode::NOT_FOUND,
            detail: "Not Found".to_string(),
            path: path.to_string(),
        }
    }

    pub fn method_not_allowed(path: &str) -> Self {
        Self::Http {
            status: StatusCode::METHOD_NOT_ALLOWED,
            detail: "Method Not Allowed".to_string(),
            path: path.to_string(),
        }
    }

    pub fn validation(details: serde_json::Value) -> Self {
        Self::Validation { details }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            ServiceError::Http {
                status,
                detail,
                path,
            } => {
                tracing::warn!(status = status.as_u16(), %path, "HTTP {}: {}", status.as_u16(), detail);
                let body = Json(json!({
                    "error": detail,
                    "status_code": status.as_u16(),
                    "path": path,
                }));
                (status, body).into_response()
            }
            ServiceError::Validation { details } => {
                tracing::warn!(%details, "request validation failed");
                let body = Json(json!({
                    "error": "Validation Error",
                    "message": "Invalid request parameters",
                    "details": details,
                }));
                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }
            ServiceError::Internal(detail) => {
                tracing::error!(%detail, "unhandled fault while serving request");
                let body = Json(json!({
                    "error": "Internal Server Error",
                    "message": "An unexpected error occurred",
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

/// Responder for `CatchPanicLayer`: a panic escaping a handler becomes the
/// generic 500 body. The payload is logged server-side; the default panic
/// hook has already printed the backtrace to stderr.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "panic with non-string payload".to_string()
    };
    ServiceError::internal(format!("panic: {detail}")).into_response()
}
