use thiserror::Error;

/// Error for BookId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for BookTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookTitleError {
    #[error("Title must not be empty")]
    Empty,
}

/// Error for AuthorName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthorNameError {
    #[error("Author must not be empty")]
    Empty,
}

/// Error for Description validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DescriptionError {
    #[error("Description too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for Rating validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RatingError {
    #[error("Rating must be between {min} and {max}, got {actual}")]
    OutOfRange { min: i32, max: i32, actual: i32 },
}

/// Top-level error for all book-related operations
#[derive(Debug, Clone, Error)]
pub enum BookError {
    #[error("Invalid book ID: {0}")]
    InvalidBookId(#[from] BookIdError),

    #[error("Invalid title: {0}")]
    InvalidTitle(#[from] BookTitleError),

    #[error("Invalid author: {0}")]
    InvalidAuthor(#[from] AuthorNameError),

    #[error("Invalid description: {0}")]
    InvalidDescription(#[from] DescriptionError),

    #[error("Invalid rating: {0}")]
    InvalidRating(#[from] RatingError),

    /// Carries the identifier the caller asked for.
    #[error("Book with id {0} not in inventory")]
    NotFound(String),

    /// The caller asked for a negative number of books.
    #[error("You are trying to fetch a negative number of books! {0}")]
    NegativeBookCount(i64),
}
