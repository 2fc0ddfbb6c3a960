use async_trait::async_trait;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::NewTodo;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::UpdateTodoCommand;
use crate::domain::user::models::UserId;

/// Port for todo domain service operations.
///
/// Operations taking an `owner` are scoped to that identity: a todo owned by
/// someone else behaves exactly like a missing one.
#[async_trait]
pub trait TodoServicePort: Send + Sync + 'static {
    /// Retrieve every todo in the store, regardless of owner.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_todos(&self) -> Result<Vec<Todo>, TodoError>;

    /// Retrieve all todos belonging to one owner.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_todos_for_owner(&self, owner: &UserId) -> Result<Vec<Todo>, TodoError>;

    /// Retrieve a single todo by id, scoped to its owner.
    ///
    /// # Errors
    /// * `NotFound` - No such todo for this owner
    /// * `DatabaseError` - Database operation failed
    async fn get_todo(&self, id: TodoId, owner: &UserId) -> Result<Todo, TodoError>;

    /// Create a new todo owned by the caller.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_todo(
        &self,
        command: CreateTodoCommand,
        owner: &UserId,
    ) -> Result<Todo, TodoError>;

    /// Apply a partial update to an owned todo.
    ///
    /// Absent command fields leave the stored values unchanged.
    ///
    /// # Errors
    /// * `NotFound` - No such todo for this owner
    /// * `DatabaseError` - Database operation failed
    async fn update_todo(
        &self,
        id: TodoId,
        command: UpdateTodoCommand,
        owner: &UserId,
    ) -> Result<Todo, TodoError>;

    /// Delete an owned todo.
    ///
    /// # Errors
    /// * `NotFound` - No such todo for this owner
    /// * `DatabaseError` - Database operation failed
    async fn delete_todo(&self, id: TodoId, owner: &UserId) -> Result<(), TodoError>;
}

/// Persistence operations for the todo aggregate.
///
/// Owner scoping lives here: every per-item query filters on the owner
/// column, so handlers never need a separate authorization step.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    /// Retrieve all todos.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_all(&self) -> Result<Vec<Todo>, TodoError>;

    /// Retrieve all todos for one owner.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<Todo>, TodoError>;

    /// Retrieve a todo by id and owner.
    ///
    /// # Returns
    /// Optional todo (None if missing or owned by someone else)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id_for_owner(
        &self,
        id: TodoId,
        owner: &UserId,
    ) -> Result<Option<Todo>, TodoError>;

    /// Persist a new todo, returning the stored row with its assigned id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, todo: NewTodo) -> Result<Todo, TodoError>;

    /// Update an existing todo row.
    ///
    /// # Errors
    /// * `NotFound` - Update affected no rows
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, todo: &Todo) -> Result<(), TodoError>;

    /// Delete a todo by id and owner.
    ///
    /// # Errors
    /// * `NotFound` - Delete affected no rows
    /// * `DatabaseError` - Database operation failed
    async fn delete_for_owner(&self, id: TodoId, owner: &UserId) -> Result<(), TodoError>;
}
