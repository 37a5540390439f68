use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Token payload minted by `usersctl token`. Every standard claim is optional
/// so tokens from other issuers decode too; unknown claims are carried along.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    pub fn new(sub: impl Into<String>, role: Option<String>, expiry_hours: u64) -> Self {
        let now = Utc::now();
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            sub: Some(sub.into()),
            role,
            exp: Some(exp),
            iat: Some(now.timestamp()),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("JWT secret not configured")]
    MissingSecret,

    #[error("JWT generation error: {0}")]
    TokenGeneration(#[source] jsonwebtoken::errors::Error),

    #[error("Invalid JWT token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),
}

pub fn generate_jwt<T: Serialize>(claims: &T, secret: &str) -> Result<String, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::MissingSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), claims, &encoding_key).map_err(JwtError::TokenGeneration)
}

/// Verify the signature, and the expiry when the token has one.
///
/// No claim is mandatory: the payload comes back as the raw JSON object the
/// issuer signed, whatever its shape.
pub fn verify_jwt(token: &str, secret: &str) -> Result<Map<String, Value>, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::MissingSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::default();
    validation.required_spec_claims.clear();

    let token_data = decode::<Map<String, Value>>(token, &decoding_key, &validation)
        .map_err(JwtError::InvalidToken)?;

    Ok(token_data.claims)
}
