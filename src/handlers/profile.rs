use axum::{response::Json, Extension};
use serde_json::{json, Value};

use crate::middleware::AuthUser;

/// GET /profile - Decoded claims of the caller's token
pub async fn whoami(Extension(user): Extension<AuthUser>) -> Json<Value> {
    Json(json!({
        "message": "Access granted",
        "user": user.claims,
    }))
}
