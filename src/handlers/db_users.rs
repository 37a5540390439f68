use axum::{extract::State, Json};

use crate::database::{DatabaseError, DbUser, UserRepository};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /db-users - Every row of the users table.
///
/// Any failure (no pool configured, connection refused, bad query) is the same
/// generic 500 to the client; details go to the log.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<DbUser>>, ApiError> {
    let pool = state.db.clone().ok_or(DatabaseError::ConfigMissing("DATABASE_URL"))?;

    let users = UserRepository::new(pool).find_all().await?;
    Ok(Json(users))
}
