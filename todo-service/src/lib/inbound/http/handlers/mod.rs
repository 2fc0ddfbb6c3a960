use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::address::errors::AddressError;
use crate::domain::todo::errors::TodoError;
use crate::user::errors::UserError;

pub mod change_password;
pub mod create_address;
pub mod create_todo;
pub mod delete_todo;
pub mod delete_user;
pub mod get_todo;
pub mod get_user;
pub mod list_todos;
pub mod list_user_todos;
pub mod list_users;
pub mod login;
pub mod register;
pub mod update_todo;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unauthorized(msg) => {
                // 401 always carries a re-authentication challenge
                return (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, "Bearer")],
                    Json(ApiResponseBody::new_error(StatusCode::UNAUTHORIZED, msg)),
                )
                    .into_response();
            }
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) | UserError::NotFoundByUsername(_) => {
                ApiError::NotFound(err.to_string())
            }
            // Registration constraint failures surface as 400
            UserError::UsernameAlreadyExists(_) | UserError::EmailAlreadyExists(_) => {
                ApiError::BadRequest(err.to_string())
            }
            UserError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            UserError::InvalidUsername(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidUserId(_) => ApiError::UnprocessableEntity(err.to_string()),
            UserError::PasswordHashing(_)
            | UserError::DatabaseError(_)
            | UserError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound(_) => ApiError::NotFound(err.to_string()),
            TodoError::InvalidTodoId(_) | TodoError::InvalidPriority(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            TodoError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<AddressError> for ApiError {
    fn from(err: AddressError) -> Self {
        match err {
            AddressError::OwnerNotFound(_) => ApiError::BadRequest(err.to_string()),
            AddressError::InvalidAddressId(_) => ApiError::UnprocessableEntity(err.to_string()),
            AddressError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Wire representation of a todo, shared by the todo handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoData {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub priority: i32,
    pub complete: bool,
    pub owner_id: i64,
}

impl From<&crate::domain::todo::models::Todo> for TodoData {
    fn from(todo: &crate::domain::todo::models::Todo) -> Self {
        Self {
            id: todo.id.as_i64(),
            title: todo.title.clone(),
            description: todo.description.clone(),
            priority: todo.priority.as_i32(),
            complete: todo.complete,
            owner_id: todo.owner_id.as_i64(),
        }
    }
}

/// Wire representation of a user, shared by the user handlers.
///
/// The password hash never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub phone_number: String,
    pub address_id: Option<i64>,
}

impl From<&crate::domain::user::models::User> for UserData {
    fn from(user: &crate::domain::user::models::User) -> Self {
        Self {
            id: user.id.as_i64(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            is_active: user.is_active,
            phone_number: user.phone_number.clone(),
            address_id: user.address_id.map(|id| id.as_i64()),
        }
    }
}
