use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::BookData;
use crate::domain::book::errors::BookError;
use crate::domain::book::models::AuthorName;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::Description;
use crate::domain::book::models::Genre;
use crate::domain::book::models::Rating;
use crate::domain::book::ports::BookServicePort;
use crate::inbound::http::router::AppState;

pub async fn create_book(
    State(state): State<AppState>,
    Json(body): Json<CreateBookRequestBody>,
) -> Result<ApiSuccess<BookData>, ApiError> {
    state
        .book_service
        .add_book(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::CREATED, book.into()))
}

/// HTTP request body for adding a book (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateBookRequestBody {
    title: String,
    author: String,
    genre: Vec<Genre>,
    description: Option<String>,
    rating: Option<i32>,
}

impl CreateBookRequestBody {
    fn try_into_command(self) -> Result<CreateBookCommand, BookError> {
        let title = BookTitle::new(self.title)?;
        let author = AuthorName::new(self.author)?;
        let description = self.description.map(Description::new).transpose()?;
        let rating = self.rating.map(Rating::new).transpose()?;

        Ok(CreateBookCommand {
            title,
            author,
            genre: self.genre,
            description,
            rating,
        })
    }
}
