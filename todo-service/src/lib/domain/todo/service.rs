use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::NewTodo;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::UpdateTodoCommand;
use crate::domain::todo::ports::TodoRepository;
use crate::domain::todo::ports::TodoServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for todo operations.
pub struct TodoService<TR>
where
    TR: TodoRepository,
{
    repository: Arc<TR>,
}

impl<TR> TodoService<TR>
where
    TR: TodoRepository,
{
    /// Create a new todo service with an injected repository.
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<TR> TodoServicePort for TodoService<TR>
where
    TR: TodoRepository,
{
    async fn list_todos(&self) -> Result<Vec<Todo>, TodoError> {
        self.repository.find_all().await
    }

    async fn list_todos_for_owner(&self, owner: &UserId) -> Result<Vec<Todo>, TodoError> {
        self.repository.find_by_owner(owner).await
    }

    async fn get_todo(&self, id: TodoId, owner: &UserId) -> Result<Todo, TodoError> {
        self.repository
            .find_by_id_for_owner(id, owner)
            .await?
            .ok_or(TodoError::NotFound(id.as_i64()))
    }

    async fn create_todo(
        &self,
        command: CreateTodoCommand,
        owner: &UserId,
    ) -> Result<Todo, TodoError> {
        let todo = NewTodo {
            title: command.title,
            description: command.description,
            priority: command.priority,
            complete: command.complete,
            owner_id: *owner,
        };

        self.repository.create(todo).await
    }

    async fn update_todo(
        &self,
        id: TodoId,
        command: UpdateTodoCommand,
        owner: &UserId,
    ) -> Result<Todo, TodoError> {
        let mut todo = self
            .repository
            .find_by_id_for_owner(id, owner)
            .await?
            .ok_or(TodoError::NotFound(id.as_i64()))?;

        if let Some(title) = command.title {
            todo.title = title;
        }

        if let Some(description) = command.description {
            todo.description = Some(description);
        }

        if let Some(priority) = command.priority {
            todo.priority = priority;
        }

        if let Some(complete) = command.complete {
            todo.complete = complete;
        }

        self.repository.update(&todo).await?;

        Ok(todo)
    }

    async fn delete_todo(&self, id: TodoId, owner: &UserId) -> Result<(), TodoError> {
        self.repository.delete_for_owner(id, owner).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::todo::models::Priority;

    mock! {
        pub TestTodoRepository {}

        #[async_trait]
        impl TodoRepository for TestTodoRepository {
            async fn find_all(&self) -> Result<Vec<Todo>, TodoError>;
            async fn find_by_owner(&self, owner: &UserId) -> Result<Vec<Todo>, TodoError>;
            async fn find_by_id_for_owner(&self, id: TodoId, owner: &UserId) -> Result<Option<Todo>, TodoError>;
            async fn create(&self, todo: NewTodo) -> Result<Todo, TodoError>;
            async fn update(&self, todo: &Todo) -> Result<(), TodoError>;
            async fn delete_for_owner(&self, id: TodoId, owner: &UserId) -> Result<(), TodoError>;
        }
    }

    fn stored_todo(id: i64, owner: i64) -> Todo {
        Todo {
            id: TodoId(id),
            title: "buy milk".to_string(),
            description: Some("two liters".to_string()),
            priority: Priority::new(3).unwrap(),
            complete: false,
            owner_id: UserId(owner),
        }
    }

    #[tokio::test]
    async fn test_create_todo_assigns_owner() {
        let mut repository = MockTestTodoRepository::new();

        repository
            .expect_create()
            .withf(|todo| todo.owner_id == UserId(1) && todo.title == "buy milk")
            .times(1)
            .returning(|todo| {
                Ok(Todo {
                    id: TodoId(10),
                    title: todo.title,
                    description: todo.description,
                    priority: todo.priority,
                    complete: todo.complete,
                    owner_id: todo.owner_id,
                })
            });

        let service = TodoService::new(Arc::new(repository));

        let command = CreateTodoCommand {
            title: "buy milk".to_string(),
            description: None,
            priority: Priority::new(3).unwrap(),
            complete: false,
        };

        let todo = service.create_todo(command, &UserId(1)).await.unwrap();
        assert_eq!(todo.id, TodoId(10));
        assert_eq!(todo.owner_id, UserId(1));
    }

    #[tokio::test]
    async fn test_get_todo_wrong_owner_is_not_found() {
        let mut repository = MockTestTodoRepository::new();

        // The repository's owner filter hides the row from other callers
        repository
            .expect_find_by_id_for_owner()
            .withf(|id, owner| *id == TodoId(10) && *owner == UserId(2))
            .times(1)
            .returning(|_, _| Ok(None));

        let service = TodoService::new(Arc::new(repository));

        let result = service.get_todo(TodoId(10), &UserId(2)).await;
        assert!(matches!(result.unwrap_err(), TodoError::NotFound(10)));
    }

    #[tokio::test]
    async fn test_update_todo_partial_fields() {
        let mut repository = MockTestTodoRepository::new();

        let existing = stored_todo(10, 1);
        repository
            .expect_find_by_id_for_owner()
            .times(1)
            .returning(move |_, _| Ok(Some(existing.clone())));

        repository
            .expect_update()
            .withf(|todo| {
                // Only the title changed; other fields retain stored values
                todo.title == "buy oat milk"
                    && todo.description.as_deref() == Some("two liters")
                    && todo.priority.as_i32() == 3
                    && !todo.complete
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = TodoService::new(Arc::new(repository));

        let command = UpdateTodoCommand {
            title: Some("buy oat milk".to_string()),
            description: None,
            priority: None,
            complete: None,
        };

        let todo = service
            .update_todo(TodoId(10), command, &UserId(1))
            .await
            .unwrap();
        assert_eq!(todo.title, "buy oat milk");
    }

    #[tokio::test]
    async fn test_update_todo_applies_false_complete() {
        let mut repository = MockTestTodoRepository::new();

        let mut existing = stored_todo(10, 1);
        existing.complete = true;
        repository
            .expect_find_by_id_for_owner()
            .times(1)
            .returning(move |_, _| Ok(Some(existing.clone())));

        // A present `false` is applied, not skipped
        repository
            .expect_update()
            .withf(|todo| !todo.complete)
            .times(1)
            .returning(|_| Ok(()));

        let service = TodoService::new(Arc::new(repository));

        let command = UpdateTodoCommand {
            title: None,
            description: None,
            priority: None,
            complete: Some(false),
        };

        let todo = service
            .update_todo(TodoId(10), command, &UserId(1))
            .await
            .unwrap();
        assert!(!todo.complete);
    }

    #[tokio::test]
    async fn test_update_missing_todo() {
        let mut repository = MockTestTodoRepository::new();

        repository
            .expect_find_by_id_for_owner()
            .times(1)
            .returning(|_, _| Ok(None));
        repository.expect_update().times(0);

        let service = TodoService::new(Arc::new(repository));

        let command = UpdateTodoCommand {
            title: Some("anything".to_string()),
            description: None,
            priority: None,
            complete: None,
        };

        let result = service.update_todo(TodoId(99), command, &UserId(1)).await;
        assert!(matches!(result.unwrap_err(), TodoError::NotFound(99)));
    }

    #[tokio::test]
    async fn test_delete_todo_not_found() {
        let mut repository = MockTestTodoRepository::new();

        repository
            .expect_delete_for_owner()
            .times(1)
            .returning(|id, _| Err(TodoError::NotFound(id.as_i64())));

        let service = TodoService::new(Arc::new(repository));

        let result = service.delete_todo(TodoId(99), &UserId(1)).await;
        assert!(matches!(result.unwrap_err(), TodoError::NotFound(99)));
    }
}
