use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::NewTodo;
use crate::domain::todo::models::Priority;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::ports::TodoRepository;
use crate::domain::user::models::UserId;

pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn from_row(row: &PgRow) -> Result<Todo, TodoError> {
        Ok(Todo {
            id: TodoId(
                row.try_get("todo_id")
                    .map_err(|e| TodoError::DatabaseError(e.to_string()))?,
            ),
            title: row
                .try_get("title")
                .map_err(|e| TodoError::DatabaseError(e.to_string()))?,
            description: row
                .try_get("description")
                .map_err(|e| TodoError::DatabaseError(e.to_string()))?,
            priority: Priority::new(
                row.try_get("priority")
                    .map_err(|e| TodoError::DatabaseError(e.to_string()))?,
            )?,
            complete: row
                .try_get("complete")
                .map_err(|e| TodoError::DatabaseError(e.to_string()))?,
            owner_id: UserId(
                row.try_get("owner_id")
                    .map_err(|e| TodoError::DatabaseError(e.to_string()))?,
            ),
        })
    }
}

const TODO_COLUMNS: &str = "todo_id, title, description, priority, complete, owner_id";

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, TodoError> {
        let rows = sqlx::query(&format!("SELECT {TODO_COLUMNS} FROM todos ORDER BY todo_id"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::from_row).collect()
    }

    async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<Todo>, TodoError> {
        let rows = sqlx::query(&format!(
            "SELECT {TODO_COLUMNS} FROM todos WHERE owner_id = $1 ORDER BY todo_id"
        ))
        .bind(owner.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::from_row).collect()
    }

    async fn find_by_id_for_owner(
        &self,
        id: TodoId,
        owner: &UserId,
    ) -> Result<Option<Todo>, TodoError> {
        // Owner scoping: a row owned by someone else is indistinguishable
        // from a missing one
        let row = sqlx::query(&format!(
            "SELECT {TODO_COLUMNS} FROM todos WHERE todo_id = $1 AND owner_id = $2"
        ))
        .bind(id.as_i64())
        .bind(owner.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::from_row).transpose()
    }

    async fn create(&self, todo: NewTodo) -> Result<Todo, TodoError> {
        let row = sqlx::query(
            r#"
            INSERT INTO todos (title, description, priority, complete, owner_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING todo_id
            "#,
        )
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.priority.as_i32())
        .bind(todo.complete)
        .bind(todo.owner_id.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        let id: i64 = row
            .try_get("todo_id")
            .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        Ok(Todo {
            id: TodoId(id),
            title: todo.title,
            description: todo.description,
            priority: todo.priority,
            complete: todo.complete,
            owner_id: todo.owner_id,
        })
    }

    async fn update(&self, todo: &Todo) -> Result<(), TodoError> {
        let result = sqlx::query(
            r#"
            UPDATE todos
            SET title = $3, description = $4, priority = $5, complete = $6
            WHERE todo_id = $1 AND owner_id = $2
            "#,
        )
        .bind(todo.id.as_i64())
        .bind(todo.owner_id.as_i64())
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.priority.as_i32())
        .bind(todo.complete)
        .execute(&self.pool)
        .await
        .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TodoError::NotFound(todo.id.as_i64()));
        }

        Ok(())
    }

    async fn delete_for_owner(&self, id: TodoId, owner: &UserId) -> Result<(), TodoError> {
        let result = sqlx::query("DELETE FROM todos WHERE todo_id = $1 AND owner_id = $2")
            .bind(id.as_i64())
            .bind(owner.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TodoError::NotFound(id.as_i64()));
        }

        Ok(())
    }
}
