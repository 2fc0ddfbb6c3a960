use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<UserData>>, ApiError> {
    let users = state
        .user_service
        .list_users()
        .await
        .map_err(ApiError::from)?;

    // An uninitialised store reports as a client error, matching the
    // documented surface
    if users.is_empty() {
        return Err(ApiError::BadRequest("No users found".to_string()));
    }

    Ok(ApiSuccess::new(
        StatusCode::OK,
        users.iter().map(UserData::from).collect(),
    ))
}
