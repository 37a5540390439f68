use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use serde_json::{Map, Value};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::User;
use crate::validation::validate_user;

use super::utils::{parse_path_id, parse_payload};

/// PUT /users/:id - Shallow-merge the submitted fields into a user.
///
/// Every stored record with that id gets the changes applied, and each merged
/// record is validated before anything is replaced. When no record has that id
/// the changes alone are validated; nothing is replaced but the document is
/// still rewritten. The response
/// echoes the submitted fields, not the merged record.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Map<String, Value>>, ApiError> {
    let changes = parse_payload(&body)?;
    if changes.is_empty() {
        return Err(ApiError::EmptyPayload);
    }

    let id = parse_path_id(&id);
    let mut users = state.store.load_all().await?;

    let merged: Vec<(usize, Map<String, Value>)> = users
        .iter()
        .enumerate()
        .filter(|(_, user)| Some(user.id) == id)
        .map(|(i, user)| (i, user.merged_with(&changes)))
        .collect();

    if merged.is_empty() {
        validate_user(&changes, &users, id)?;
    }
    for (_, candidate) in &merged {
        validate_user(candidate, &users, id)?;
    }

    for (i, candidate) in merged {
        if let Some(slot) = users.get_mut(i) {
            *slot = User::from_payload(candidate)?;
            info!("Updated user {}", slot.id);
        }
    }
    state.store.save_all(&users).await?;

    Ok(Json(changes))
}
