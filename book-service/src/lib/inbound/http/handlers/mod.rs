use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::Genre;

pub mod create_book;
pub mod delete_book;
pub mod list_books;
pub mod search_book;
pub mod update_book;

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
    /// The catalog's custom status for a negative requested count.
    Teapot(String),
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
            ApiError::Teapot(msg) => (StatusCode::IM_A_TEAPOT, msg),
            ApiError::NotFound(msg) => {
                // Missing-book responses carry the legacy diagnostic header
                return (
                    StatusCode::NOT_FOUND,
                    [(
                        HeaderName::from_static("x-header-error"),
                        "Nothing with that UUID",
                    )],
                    Json(ApiResponseBody::new_error(StatusCode::NOT_FOUND, msg)),
                )
                    .into_response();
            }
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<BookError> for ApiError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::NotFound(_) => ApiError::NotFound(err.to_string()),
            BookError::NegativeBookCount(_) => ApiError::Teapot(err.to_string()),
            BookError::InvalidBookId(_)
            | BookError::InvalidTitle(_)
            | BookError::InvalidAuthor(_)
            | BookError::InvalidDescription(_)
            | BookError::InvalidRating(_) => ApiError::UnprocessableEntity(err.to_string()),
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

/// Wire representation of a catalog entry, shared by the book handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookData {
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub genre: Vec<Genre>,
    pub description: Option<String>,
    pub rating: Option<i32>,
}

impl From<&Book> for BookData {
    fn from(book: &Book) -> Self {
        Self {
            book_id: book.id.to_string(),
            title: book.title.as_str().to_string(),
            author: book.author.as_str().to_string(),
            genre: book.genre.clone(),
            description: book.description.as_ref().map(|d| d.as_str().to_string()),
            rating: book.rating.map(|r| r.as_i32()),
        }
    }
}
