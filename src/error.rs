// HTTP API Error Types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use std::backtrace::Backtrace;
use thiserror::Error;

use crate::database::DatabaseError;
use crate::store::StoreError;
use crate::validation::ValidationError;

/// Errors a handler can answer with.
///
/// Most variants render directly as `{"error": message}`. `Forwarded` is handed
/// to the error responder middleware, which renders the uniform envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    // 400 Bad Request
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // 401 Unauthorized
    #[error("{0}")]
    Unauthorized(String),

    // 403 Forbidden
    #[error("{0}")]
    Forbidden(String),

    // 500 Internal Server Error
    #[error("Error reading users data")]
    StoreRead,

    #[error("Error saving user data")]
    StoreWrite,

    #[error("Error fetching users from database")]
    Database,

    // Kept at 500 for compatibility with existing clients even though the
    // request, not the server, is at fault.
    #[error("No data provided for update")]
    EmptyPayload,

    #[error(transparent)]
    Forwarded(#[from] ForwardedError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::StoreRead
            | ApiError::StoreWrite
            | ApiError::Database
            | ApiError::EmptyPayload => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Forwarded(err) => err.status,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }
}

// Storage details are logged here and never reach the client
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        tracing::error!("User store error: {}", err);
        match err {
            StoreError::Read { .. } | StoreError::Parse { .. } => ApiError::StoreRead,
            StoreError::Serialize(_) | StoreError::Write { .. } => ApiError::StoreWrite,
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        tracing::error!("Database error: {}", err);
        ApiError::Database
    }
}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Forwarded(err) => err.into_response(),
            other => (other.status_code(), Json(json!({ "error": other.to_string() }))).into_response(),
        }
    }
}

/// An error passed on to the centralized error responder.
///
/// The backtrace is captured where the error is raised so the responder can
/// log it and, in development, return it to the caller.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ForwardedError {
    pub status: StatusCode,
    pub message: String,
    pub stack: String,
}

impl ForwardedError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            stack: Backtrace::force_capture().to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn envelope(&self, include_stack: bool) -> Value {
        let mut body = json!({
            "status": "error",
            "statusCode": self.status.as_u16(),
            "message": self.message,
        });
        if include_stack {
            body["stack"] = Value::String(self.stack.clone());
        }
        body
    }
}

// Renders without the stack; the responder middleware replaces the body and
// picks the error back up from the response extensions.
impl IntoResponse for ForwardedError {
    fn into_response(self) -> Response {
        let mut response = (self.status, Json(self.envelope(false))).into_response();
        response.extensions_mut().insert(self);
        response
    }
}
