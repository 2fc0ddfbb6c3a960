use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::UpdateBookCommand;
use crate::domain::book::ports::BookRepository;
use crate::domain::book::ports::BookServicePort;

/// Domain service implementation for the book catalog.
pub struct BookService<BR>
where
    BR: BookRepository,
{
    repository: Arc<BR>,
}

impl<BR> BookService<BR>
where
    BR: BookRepository,
{
    /// Create a new book service with an injected repository.
    pub fn new(repository: Arc<BR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<BR> BookServicePort for BookService<BR>
where
    BR: BookRepository,
{
    async fn list_books(&self, limit: Option<i64>) -> Result<Vec<Book>, BookError> {
        let books = self.repository.list().await?;

        match limit {
            Some(n) if n < 0 => Err(BookError::NegativeBookCount(n)),
            Some(n) if n > 0 && (n as usize) <= books.len() => {
                Ok(books.into_iter().take(n as usize).collect())
            }
            // Zero, absent, or larger than the catalog: everything
            _ => Ok(books),
        }
    }

    async fn get_book(&self, id: BookId) -> Result<Book, BookError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(id.to_string()))
    }

    async fn add_book(&self, command: CreateBookCommand) -> Result<Book, BookError> {
        let book = Book {
            id: BookId::new(),
            title: command.title,
            author: command.author,
            genre: command.genre,
            description: command.description,
            rating: command.rating,
        };

        self.repository.add(book.clone()).await?;

        Ok(book)
    }

    async fn update_book(&self, command: UpdateBookCommand) -> Result<Book, BookError> {
        let mut book = self
            .repository
            .find_by_id(command.book_id)
            .await?
            .ok_or(BookError::NotFound(command.book_id.to_string()))?;

        if let Some(title) = command.title {
            book.title = title;
        }

        if let Some(author) = command.author {
            book.author = author;
        }

        if let Some(genre) = command.genre {
            book.genre = genre;
        }

        if let Some(description) = command.description {
            book.description = Some(description);
        }

        if let Some(rating) = command.rating {
            book.rating = Some(rating);
        }

        self.repository.update(book.clone()).await?;

        Ok(book)
    }

    async fn delete_book(&self, id: BookId) -> Result<Book, BookError> {
        self.repository
            .delete(id)
            .await?
            .ok_or(BookError::NotFound(id.to_string()))
    }
}
