use std::fmt;
use std::str::FromStr;

use crate::domain::todo::errors::PriorityError;
use crate::domain::todo::errors::TodoIdError;
use crate::domain::user::models::UserId;

/// To-do aggregate entity.
///
/// Every todo is owned by the identity that created it; all reads and writes
/// are scoped to that owner.
#[derive(Debug, Clone)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub complete: bool,
    pub owner_id: UserId,
}

/// Todo unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodoId(pub i64);

impl TodoId {
    /// Parse a todo ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid integer id
    pub fn from_string(s: &str) -> Result<Self, TodoIdError> {
        i64::from_str(s)
            .map(TodoId)
            .map_err(|e| TodoIdError::InvalidFormat(e.to_string()))
    }

    /// Get the raw integer value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Priority value object constrained to the range 1-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority(i32);

impl Priority {
    const MIN: i32 = 1;
    const MAX: i32 = 5;

    /// Create a validated priority.
    ///
    /// # Errors
    /// * `OutOfRange` - Value outside 1-5
    pub fn new(value: i32) -> Result<Self, PriorityError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PriorityError::OutOfRange {
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

/// Command to create a new todo for an owner.
#[derive(Debug)]
pub struct CreateTodoCommand {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub complete: bool,
}

/// Command to update an existing todo with optional validated fields.
///
/// All fields are optional to support partial updates: an absent field is
/// left unchanged, a present value (including `complete: false`) is applied.
#[derive(Debug)]
pub struct UpdateTodoCommand {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub complete: Option<bool>,
}

/// New todo row ready for persistence (id assigned by the store).
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub complete: bool,
    pub owner_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_bounds() {
        assert!(Priority::new(1).is_ok());
        assert!(Priority::new(5).is_ok());
        assert!(matches!(
            Priority::new(0),
            Err(PriorityError::OutOfRange { .. })
        ));
        assert!(matches!(
            Priority::new(6),
            Err(PriorityError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_todo_id_from_string() {
        assert_eq!(TodoId::from_string("7"), Ok(TodoId(7)));
        assert!(TodoId::from_string("seven").is_err());
    }
}
