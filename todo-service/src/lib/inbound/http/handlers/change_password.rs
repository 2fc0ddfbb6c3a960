use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn change_password(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<ChangePasswordRequestBody>,
) -> Result<ApiSuccess<ChangePasswordResponseData>, ApiError> {
    state
        .user_service
        .change_password(&auth_user.user_id, body.new_password)
        .await
        .map_err(|e| match e {
            // The resolved identity vanished between token issue and now
            UserError::NotFound(_) => {
                ApiError::BadRequest("Could not change password".to_string())
            }
            _ => ApiError::from(e),
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ChangePasswordResponseData {
            message: format!("password updated for {}", auth_user.username),
        },
    ))
}

/// HTTP request body for changing the caller's password (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChangePasswordRequestBody {
    new_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangePasswordResponseData {
    pub message: String,
}
