use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::TodoData;
use crate::domain::todo::ports::TodoServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_user_todos(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<TodoData>>, ApiError> {
    state
        .todo_service
        .list_todos_for_owner(&auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|todos| {
            ApiSuccess::new(
                StatusCode::OK,
                todos.iter().map(TodoData::from).collect(),
            )
        })
}
