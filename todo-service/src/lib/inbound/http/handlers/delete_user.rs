use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn delete_user(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<DeleteUserResponseData>, ApiError> {
    state
        .user_service
        .delete_user(&auth_user.user_id)
        .await
        .map_err(|e| match e {
            // Delete affected no rows
            UserError::NotFound(_) => ApiError::BadRequest("Could not delete user".to_string()),
            _ => ApiError::from(e),
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        DeleteUserResponseData {
            message: format!("user {} was deleted.", auth_user.username),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteUserResponseData {
    pub message: String,
}
