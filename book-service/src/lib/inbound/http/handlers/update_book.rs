use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::BookData;
use crate::domain::book::errors::BookError;
use crate::domain::book::models::AuthorName;
use crate::domain::book::models::BookId;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::Description;
use crate::domain::book::models::Genre;
use crate::domain::book::models::Rating;
use crate::domain::book::models::UpdateBookCommand;
use crate::domain::book::ports::BookServicePort;
use crate::inbound::http::router::AppState;

pub async fn update_book(
    State(state): State<AppState>,
    Json(body): Json<UpdateBookRequestBody>,
) -> Result<ApiSuccess<BookData>, ApiError> {
    state
        .book_service
        .update_book(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::OK, book.into()))
}

/// HTTP request body for partially updating a book (raw JSON)
///
/// The target is addressed by `book_id` in the body; absent fields are left
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateBookRequestBody {
    book_id: String,
    title: Option<String>,
    author: Option<String>,
    genre: Option<Vec<Genre>>,
    description: Option<String>,
    rating: Option<i32>,
}

impl UpdateBookRequestBody {
    fn try_into_command(self) -> Result<UpdateBookCommand, BookError> {
        let book_id = BookId::from_string(&self.book_id)?;
        let title = self.title.map(BookTitle::new).transpose()?;
        let author = self.author.map(AuthorName::new).transpose()?;
        let description = self.description.map(Description::new).transpose()?;
        let rating = self.rating.map(Rating::new).transpose()?;

        Ok(UpdateBookCommand {
            book_id,
            title,
            author,
            genre: self.genre,
            description,
            rating,
        })
    }
}
