use axum::{extract::State, Json};

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::User;

/// GET /users - Every user in the backing document, in stored order
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.store.load_all().await?;
    Ok(Json(users))
}
