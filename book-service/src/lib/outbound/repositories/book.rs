use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::AuthorName;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::Description;
use crate::domain::book::models::Genre;
use crate::domain::book::models::Rating;
use crate::domain::book::ports::BookRepository;

/// In-memory book store.
///
/// The catalog lives behind a process-wide RwLock and resets on restart.
/// Writers serialise on the lock; no cross-request invariants beyond that.
#[derive(Debug, Clone)]
pub struct InMemoryBookRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl InMemoryBookRepository {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            books: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a catalog pre-filled with the demo titles.
    pub fn with_sample_catalog() -> Self {
        let books = vec![
            Book {
                id: BookId::new(),
                title: BookTitle::new("Romantic Book".to_string())
                    .expect("sample title is non-empty"),
                author: AuthorName::new("Some old single lady".to_string())
                    .expect("sample author is non-empty"),
                genre: vec![Genre::Romance, Genre::Drama],
                description: Some(
                    Description::new("Hopeless single lady finds dream husband".to_string())
                        .expect("sample description fits the limit"),
                ),
                rating: Some(Rating::new(69).expect("sample rating is in range")),
            },
            Book {
                id: BookId::new(),
                title: BookTitle::new("Action Packed".to_string())
                    .expect("sample title is non-empty"),
                author: AuthorName::new("Some fat dude".to_string())
                    .expect("sample author is non-empty"),
                genre: vec![Genre::Action],
                description: Some(
                    Description::new("Machine guns everywhere".to_string())
                        .expect("sample description fits the limit"),
                ),
                rating: Some(Rating::new(71).expect("sample rating is in range")),
            },
        ];

        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn list(&self) -> Result<Vec<Book>, BookError> {
        Ok(self.books.read().await.clone())
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, BookError> {
        Ok(self
            .books
            .read()
            .await
            .iter()
            .find(|book| book.id == id)
            .cloned())
    }

    async fn add(&self, book: Book) -> Result<(), BookError> {
        self.books.write().await.push(book);
        Ok(())
    }

    async fn update(&self, book: Book) -> Result<(), BookError> {
        let mut books = self.books.write().await;

        match books.iter_mut().find(|stored| stored.id == book.id) {
            Some(stored) => {
                *stored = book;
                Ok(())
            }
            None => Err(BookError::NotFound(book.id.to_string())),
        }
    }

    async fn delete(&self, id: BookId) -> Result<Option<Book>, BookError> {
        let mut books = self.books.write().await;

        let position = books.iter().position(|book| book.id == id);
        Ok(position.map(|index| books.remove(index)))
    }
}
