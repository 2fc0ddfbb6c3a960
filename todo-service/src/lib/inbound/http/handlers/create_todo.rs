use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::TodoData;
use crate::domain::todo::errors::PriorityError;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::Priority;
use crate::domain::todo::ports::TodoServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_todo(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<CreateTodoRequestBody>,
) -> Result<ApiSuccess<TodoData>, ApiError> {
    state
        .todo_service
        .create_todo(body.try_into_command()?, &auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref todo| ApiSuccess::new(StatusCode::CREATED, todo.into()))
}

/// HTTP request body for creating a todo (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTodoRequestBody {
    title: String,
    description: Option<String>,
    priority: i32,
    complete: bool,
}

impl CreateTodoRequestBody {
    fn try_into_command(self) -> Result<CreateTodoCommand, PriorityError> {
        let priority = Priority::new(self.priority)?;
        Ok(CreateTodoCommand {
            title: self.title,
            description: self.description,
            priority,
            complete: self.complete,
        })
    }
}

impl From<PriorityError> for ApiError {
    fn from(err: PriorityError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
