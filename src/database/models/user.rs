use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, FromRow, Row};
use std::str::FromStr;

use crate::database::manager::DatabaseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    User,
}

impl FromStr for Role {
    type Err = DatabaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "USER" => Ok(Role::User),
            other => Err(DatabaseError::InvalidRole(other.to_string())),
        }
    }
}

/// Row of the `"Users"` table. The password hash never leaves the server.
#[derive(Debug, Clone, Serialize)]
pub struct DbUser {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: Role,
}

// `role` is a Postgres enum; it is selected as text and parsed here.
impl<'r> FromRow<'r, PgRow> for DbUser {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let role: String = row.try_get("role")?;
        let role = role.parse::<Role>().map_err(|e: DatabaseError| sqlx::Error::ColumnDecode {
            index: "role".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            password: row.try_get("password")?,
            role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_roles() {
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("USER".parse::<Role>().unwrap(), Role::User);
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn password_is_not_serialized() {
        let user = DbUser {
            id: 1,
            name: "Camilo".to_string(),
            email: "camilo@example.com".to_string(),
            password: "secret-hash".to_string(),
            role: Role::Admin,
        };

        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({ "id": 1, "name": "Camilo", "email": "camilo@example.com", "role": "ADMIN" })
        );
    }
}
