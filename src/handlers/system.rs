use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Json},
};
use serde_json::{json, Value};

use crate::database;
use crate::error::{ApiError, ForwardedError};
use crate::state::AppState;

/// GET / - Service description
pub async fn root() -> Json<Value> {
    Json(json!({
        "name": "Users API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "users": "/users[/:id] (file store)",
            "db_users": "/db-users (database)",
            "profile": "/profile (bearer token required)",
            "health": "/health",
        }
    }))
}

/// GET /health - Whether the backing document and the database are usable
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    let store = match state.store.load_all().await {
        Ok(_) => "ok".to_string(),
        Err(e) => e.to_string(),
    };

    let database = match &state.db {
        None => "not configured".to_string(),
        Some(pool) => match database::health_check(pool).await {
            Ok(()) => "ok".to_string(),
            Err(e) => e.to_string(),
        },
    };

    let healthy = store == "ok" && (state.db.is_none() || database == "ok");
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(json!({
            "status": if healthy { "ok" } else { "degraded" },
            "timestamp": now,
            "store": store,
            "database": database,
        })),
    )
}

/// GET /error - Always fails through the error responder
pub async fn error_test() -> Result<Json<Value>, ApiError> {
    Err(ForwardedError::internal("This is a test error").into())
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> ForwardedError {
    ForwardedError::not_found(format!("Route {} not found", uri.path()))
}
