use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::User;
use crate::validation::validate_user;

use super::utils::parse_payload;

/// POST /users - Append a new user
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let payload = parse_payload(&body)?;

    let mut users = state.store.load_all().await?;
    validate_user(&payload, &users, None)?;

    let user = User::from_payload(payload)?;
    users.push(user.clone());
    state.store.save_all(&users).await?;

    info!("Created user {}", user.id);
    Ok((StatusCode::CREATED, Json(user)))
}
