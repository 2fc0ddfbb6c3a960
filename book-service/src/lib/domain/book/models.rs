use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::book::errors::AuthorNameError;
use crate::domain::book::errors::BookIdError;
use crate::domain::book::errors::BookTitleError;
use crate::domain::book::errors::DescriptionError;
use crate::domain::book::errors::RatingError;

/// Book unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(pub Uuid);

impl BookId {
    /// Generate a new random book ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a book ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, BookIdError> {
        Uuid::parse_str(s)
            .map(BookId)
            .map_err(|e| BookIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Book catalog entry.
#[derive(Debug, Clone)]
pub struct Book {
    pub id: BookId,
    pub title: BookTitle,
    pub author: AuthorName,
    pub genre: Vec<Genre>,
    pub description: Option<Description>,
    pub rating: Option<Rating>,
}

/// Genre set for the catalog, serialised with the human-readable names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    Drama,
    Action,
    Romance,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Fantasy,
}

/// Book title value object; must not be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookTitle(String);

impl BookTitle {
    /// Create a new validated title.
    ///
    /// # Errors
    /// * `Empty` - Title is empty string
    pub fn new(title: String) -> Result<Self, BookTitleError> {
        if title.is_empty() {
            Err(BookTitleError::Empty)
        } else {
            Ok(Self(title))
        }
    }

    /// Get title as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Author name value object; must not be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorName(String);

impl AuthorName {
    /// Create a new validated author name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty string
    pub fn new(author: String) -> Result<Self, AuthorNameError> {
        if author.is_empty() {
            Err(AuthorNameError::Empty)
        } else {
            Ok(Self(author))
        }
    }

    /// Get name as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Description value object limited to 100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    const MAX_LENGTH: usize = 100;

    /// Create a new validated description.
    ///
    /// # Errors
    /// * `TooLong` - Description exceeds 100 characters
    pub fn new(description: String) -> Result<Self, DescriptionError> {
        let length = description.chars().count();
        if length > Self::MAX_LENGTH {
            Err(DescriptionError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(description))
        }
    }

    /// Get description as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Rating value object constrained to the range 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(i32);

impl Rating {
    const MIN: i32 = 0;
    const MAX: i32 = 100;

    /// Create a validated rating.
    ///
    /// # Errors
    /// * `OutOfRange` - Value outside 0-100
    pub fn new(value: i32) -> Result<Self, RatingError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            })
        }
    }

    /// Get the raw integer value.
    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

/// Command to add a book to the catalog.
#[derive(Debug)]
pub struct CreateBookCommand {
    pub title: BookTitle,
    pub author: AuthorName,
    pub genre: Vec<Genre>,
    pub description: Option<Description>,
    pub rating: Option<Rating>,
}

/// Command to update an existing catalog entry with optional fields.
///
/// An absent field leaves the stored value unchanged.
#[derive(Debug)]
pub struct UpdateBookCommand {
    pub book_id: BookId,
    pub title: Option<BookTitle>,
    pub author: Option<AuthorName>,
    pub genre: Option<Vec<Genre>>,
    pub description: Option<Description>,
    pub rating: Option<Rating>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_must_not_be_empty() {
        assert!(BookTitle::new("How to code".to_string()).is_ok());
        assert!(matches!(
            BookTitle::new(String::new()),
            Err(BookTitleError::Empty)
        ));
    }

    #[test]
    fn test_description_limit() {
        assert!(Description::new("a".repeat(100)).is_ok());
        assert!(matches!(
            Description::new("a".repeat(101)),
            Err(DescriptionError::TooLong { .. })
        ));
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_ok());
        assert!(Rating::new(100).is_ok());
        assert!(matches!(
            Rating::new(-1),
            Err(RatingError::OutOfRange { .. })
        ));
        assert!(matches!(
            Rating::new(101),
            Err(RatingError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_genre_wire_names() {
        assert_eq!(
            serde_json::to_string(&Genre::SciFi).unwrap(),
            r#""Sci-Fi""#
        );
        assert_eq!(
            serde_json::from_str::<Genre>(r#""Fantasy""#).unwrap(),
            Genre::Fantasy
        );
    }
}
