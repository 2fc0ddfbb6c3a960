use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::BookData;
use crate::domain::book::ports::BookServicePort;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListBooksParams {
    pub limit_books: Option<i64>,
}

pub async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<ListBooksParams>,
) -> Result<ApiSuccess<Vec<BookData>>, ApiError> {
    state
        .book_service
        .list_books(params.limit_books)
        .await
        .map_err(ApiError::from)
        .map(|books| {
            ApiSuccess::new(
                StatusCode::OK,
                books.iter().map(BookData::from).collect(),
            )
        })
}
