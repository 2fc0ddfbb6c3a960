use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::ports::TodoServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_todo(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(todo_id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let todo_id =
        TodoId::from_string(&todo_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .todo_service
        .delete_todo(todo_id, &auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, ()))
}
