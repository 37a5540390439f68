use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use serde_json::{Map, Value};
use tracing::debug;

use crate::auth::verify_jwt;
use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated caller: the verified token payload, exactly as signed
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub claims: Map<String, Value>,
}

impl AuthUser {
    pub fn subject(&self) -> Option<&str> {
        self.claims.get("sub").and_then(Value::as_str)
    }

    pub fn role(&self) -> Option<&str> {
        self.claims.get("role").and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for AuthUser {
    fn from(claims: Map<String, Value>) -> Self {
        Self { claims }
    }
}

/// JWT authentication middleware.
///
/// No token at all is a 401; a token that fails verification is a 403. On
/// success the caller is available to handlers as `Extension<AuthUser>`.
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers)
        .ok_or_else(|| ApiError::unauthorized("Access denied. No token provided."))?;

    let claims = verify_jwt(token, &state.config.security.jwt_secret).map_err(|e| {
        debug!("Rejected token: {}", e);
        ApiError::forbidden("Invalid or expired token")
    })?;

    let user = AuthUser::from(claims);
    debug!(subject = ?user.subject(), role = ?user.role(), "Authenticated request");
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Token from `Authorization: Bearer <token>`, if one is present
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then_some(token)
}
