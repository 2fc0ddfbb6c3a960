use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::BookData;
use crate::domain::book::models::BookId;
use crate::domain::book::ports::BookServicePort;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchBookParams {
    pub book_id: String,
}

pub async fn search_book(
    State(state): State<AppState>,
    Query(params): Query<SearchBookParams>,
) -> Result<ApiSuccess<BookData>, ApiError> {
    let book_id = BookId::from_string(&params.book_id)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .book_service
        .get_book(book_id)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::OK, book.into()))
}
