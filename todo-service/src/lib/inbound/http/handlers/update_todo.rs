use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::TodoData;
use crate::domain::todo::errors::PriorityError;
use crate::domain::todo::models::Priority;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::UpdateTodoCommand;
use crate::domain::todo::ports::TodoServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_todo(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(todo_id): Path<String>,
    Json(body): Json<UpdateTodoRequestBody>,
) -> Result<ApiSuccess<TodoData>, ApiError> {
    let todo_id =
        TodoId::from_string(&todo_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let command = body.try_into_command()?;

    state
        .todo_service
        .update_todo(todo_id, command, &auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref todo| ApiSuccess::new(StatusCode::OK, todo.into()))
}

/// HTTP request body for partially updating a todo (raw JSON)
///
/// An absent field leaves the stored value unchanged; a present value is
/// applied, including `complete: false`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateTodoRequestBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<i32>,
    pub complete: Option<bool>,
}

impl UpdateTodoRequestBody {
    fn try_into_command(self) -> Result<UpdateTodoCommand, PriorityError> {
        let priority = self.priority.map(Priority::new).transpose()?;
        Ok(UpdateTodoCommand {
            title: self.title,
            description: self.description,
            priority,
            complete: self.complete,
        })
    }
}
