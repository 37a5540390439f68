use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

use super::utils::parse_path_id;

/// DELETE /users/:id - Remove every user with this id.
///
/// An id that matches nothing still answers 204.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_path_id(&id);

    let mut users = state.store.load_all().await?;
    let before = users.len();
    users.retain(|user| Some(user.id) != id);
    state.store.save_all(&users).await?;

    info!("Deleted {} user(s) with id {:?}", before - users.len(), id);
    Ok(StatusCode::NO_CONTENT)
}
