use async_trait::async_trait;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::UpdateBookCommand;

/// Port for book catalog service operations.
#[async_trait]
pub trait BookServicePort: Send + Sync + 'static {
    /// List catalog entries, optionally capped.
    ///
    /// A limit of zero, or one larger than the catalog, returns everything.
    ///
    /// # Errors
    /// * `NegativeBookCount` - The limit is negative
    async fn list_books(&self, limit: Option<i64>) -> Result<Vec<Book>, BookError>;

    /// Retrieve a single catalog entry.
    ///
    /// # Errors
    /// * `NotFound` - No book with this id
    async fn get_book(&self, id: BookId) -> Result<Book, BookError>;

    /// Add a book with a freshly generated id.
    async fn add_book(&self, command: CreateBookCommand) -> Result<Book, BookError>;

    /// Apply a partial update to a catalog entry.
    ///
    /// # Errors
    /// * `NotFound` - No book with this id
    async fn update_book(&self, command: UpdateBookCommand) -> Result<Book, BookError>;

    /// Remove a catalog entry, returning the removed book.
    ///
    /// # Errors
    /// * `NotFound` - No book with this id
    async fn delete_book(&self, id: BookId) -> Result<Book, BookError>;
}

/// Store abstraction for the book catalog.
///
/// The catalog is a plain collection; implementations decide how it is
/// shared and guarded.
#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    /// Snapshot of every book in the catalog.
    async fn list(&self) -> Result<Vec<Book>, BookError>;

    /// Retrieve a book by id.
    ///
    /// # Returns
    /// Optional book (None if not found)
    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, BookError>;

    /// Append a book to the catalog.
    async fn add(&self, book: Book) -> Result<(), BookError>;

    /// Replace the stored entry with the same id.
    ///
    /// # Errors
    /// * `NotFound` - No book with this id
    async fn update(&self, book: Book) -> Result<(), BookError>;

    /// Remove a book by id.
    ///
    /// # Returns
    /// The removed book (None if not found)
    async fn delete(&self, id: BookId) -> Result<Option<Book>, BookError>;
}
