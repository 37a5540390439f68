use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::validation::{integer_id, ValidationError};

/// A user as persisted in the backing document.
///
/// Only `id`, `name` and `email` are typed; any other field the client sent is
/// kept in `extra` and written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Coerce a validated payload into a typed record.
    pub fn from_payload(mut payload: Map<String, Value>) -> Result<Self, ValidationError> {
        let id = payload
            .remove("id")
            .as_ref()
            .and_then(integer_id)
            .ok_or(ValidationError::IdNotUnique)?;
        let name = match payload.remove("name") {
            Some(Value::String(name)) => name,
            _ => return Err(ValidationError::NameTooShort),
        };
        let email = match payload.remove("email") {
            Some(Value::String(email)) => email,
            _ => return Err(ValidationError::InvalidEmail),
        };

        Ok(Self {
            id,
            name,
            email,
            extra: payload,
        })
    }

    pub fn to_payload(&self) -> Map<String, Value> {
        let mut payload = self.extra.clone();
        payload.insert("id".to_string(), Value::from(self.id));
        payload.insert("name".to_string(), Value::String(self.name.clone()));
        payload.insert("email".to_string(), Value::String(self.email.clone()));
        payload
    }

    /// Shallow merge: fields present in `changes` replace ours, the rest stay.
    pub fn merged_with(&self, changes: &Map<String, Value>) -> Map<String, Value> {
        let mut payload = self.to_payload();
        for (key, value) in changes {
            payload.insert(key.clone(), value.clone());
        }
        payload
    }
}
