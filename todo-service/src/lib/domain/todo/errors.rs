use thiserror::Error;

/// Error for TodoId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoIdError {
    #[error("Invalid todo id: {0}")]
    InvalidFormat(String),
}

/// Error for Priority validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PriorityError {
    #[error("Priority must be between {min} and {max}, got {actual}")]
    OutOfRange { min: i32, max: i32, actual: i32 },
}

/// Top-level error for all todo-related operations
#[derive(Debug, Clone, Error)]
pub enum TodoError {
    #[error("Invalid todo ID: {0}")]
    InvalidTodoId(#[from] TodoIdError),

    #[error("Invalid priority: {0}")]
    InvalidPriority(#[from] PriorityError),

    /// Carries the identifier the caller asked for. Also returned when a
    /// todo exists but belongs to another owner.
    #[error("Your request: {0} not found!")]
    NotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
