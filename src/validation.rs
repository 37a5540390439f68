//! Shape checks for candidate user records.
//!
//! Candidates arrive as loosely-typed JSON objects, so every check takes a
//! [`Value`] and decides on the runtime type as well as the content. Checks run
//! in a fixed order (name, email, id) and the first failure wins.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::store::User;

// ASCII word characters only, dots and hyphens in the local part, at least one
// dotted label in the domain and a 2-4 character TLD.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_]{2,4}$").expect("valid regex")
});

const MIN_NAME_LENGTH: usize = 3;

// Largest integer a JSON number with a fractional part can represent exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name must be at least 3 characters long")]
    NameTooShort,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("ID must be a unique number")]
    IdNotUnique,
}

pub fn is_valid_name(name: &Value) -> bool {
    name.as_str()
        .map(|s| s.chars().count() >= MIN_NAME_LENGTH)
        .unwrap_or(false)
}

pub fn is_valid_email(email: &Value) -> bool {
    email.as_str().map(|s| EMAIL_RE.is_match(s)).unwrap_or(false)
}

/// Returns the id as an integer when the JSON value is a whole number.
///
/// Strings are never coerced: `"5"` is not an id. A number with a zero
/// fractional part (`5.0`) is accepted as `5`.
pub fn integer_id(id: &Value) -> Option<i64> {
    let Value::Number(number) = id else {
        return None;
    };

    if let Some(i) = number.as_i64() {
        return Some(i);
    }

    let f = number.as_f64()?;
    if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER {
        Some(f as i64)
    } else {
        None
    }
}

pub fn is_unique_numeric_id(id: &Value, collection: &[User]) -> bool {
    match integer_id(id) {
        Some(id) => collection.iter().all(|user| user.id != id),
        None => false,
    }
}

/// Validate a candidate against the current collection.
///
/// When `id_being_updated` matches the candidate's id the uniqueness check is
/// satisfied, so a record may be replaced by a version of itself.
pub fn validate_user(
    candidate: &Map<String, Value>,
    collection: &[User],
    id_being_updated: Option<i64>,
) -> Result<(), ValidationError> {
    let name = candidate.get("name").unwrap_or(&Value::Null);
    if !is_valid_name(name) {
        return Err(ValidationError::NameTooShort);
    }

    let email = candidate.get("email").unwrap_or(&Value::Null);
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    let id = candidate.get("id").unwrap_or(&Value::Null);
    let is_self = match (integer_id(id), id_being_updated) {
        (Some(candidate_id), Some(updating)) => candidate_id == updating,
        _ => false,
    };
    if !is_self && !is_unique_numeric_id(id, collection) {
        return Err(ValidationError::IdNotUnique);
    }

    Ok(())
}
