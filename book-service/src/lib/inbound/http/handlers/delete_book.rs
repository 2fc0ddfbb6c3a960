use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::BookData;
use crate::domain::book::models::BookId;
use crate::domain::book::ports::BookServicePort;
use crate::inbound::http::router::AppState;

pub async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<ApiSuccess<BookData>, ApiError> {
    let book_id = BookId::from_string(&book_id)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .book_service
        .delete_book(book_id)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::OK, book.into()))
}
