use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::models::Username;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    ///
    /// # Returns
    /// Configured user service instance
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        // Hash password using auth library
        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| UserError::PasswordHashing(e.to_string()))?;

        let user = NewUser {
            username: command.username,
            email: command.email,
            first_name: command.first_name,
            last_name: command.last_name,
            password_hash,
            is_active: true,
            phone_number: command.phone_number,
        };

        self.repository.create(user).await
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::NotFoundByUsername(username.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn change_password(&self, id: &UserId, new_password: String) -> Result<(), UserError> {
        // The caller must still exist; a resolved token does not guarantee it
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        let password_hash = self
            .password_hasher
            .hash(&new_password)
            .map_err(|e| UserError::PasswordHashing(e.to_string()))?;

        self.repository
            .update_password(&user.id, &password_hash)
            .await
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::Username;

    // Define mocks in the test module using mockall
    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: NewUser) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
            async fn list_all(&self) -> Result<Vec<User>, UserError>;
            async fn update_password(&self, id: &UserId, password_hash: &str) -> Result<(), UserError>;
            async fn delete(&self, id: &UserId) -> Result<(), UserError>;
        }
    }

    fn stored_user(id: i64, username: &str) -> User {
        User {
            id: UserId(id),
            username: Username::new(username.to_string()).unwrap(),
            email: EmailAddress::new(format!("{username}@example.com")).unwrap(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            password_hash: "$argon2id$test_hash".to_string(),
            is_active: true,
            phone_number: "555-0100".to_string(),
            address_id: None,
        }
    }

    #[tokio::test]
    async fn test_register_user_hashes_password() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|user| {
                user.username.as_str() == "testuser"
                    && user.email.as_str() == "test@example.com"
                    && user.is_active
                    && user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|user| {
                Ok(User {
                    id: UserId(1),
                    username: user.username,
                    email: user.email,
                    first_name: user.first_name,
                    last_name: user.last_name,
                    password_hash: user.password_hash,
                    is_active: user.is_active,
                    phone_number: user.phone_number,
                    address_id: None,
                })
            });

        let service = UserService::new(Arc::new(repository));

        let command = RegisterUserCommand {
            username: Username::new("testuser".to_string()).unwrap(),
            email: EmailAddress::new("test@example.com".to_string()).unwrap(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            password: "password123".to_string(),
            phone_number: "555-0100".to_string(),
        };

        let user = service.register_user(command).await.unwrap();
        assert_eq!(user.id, UserId(1));
        assert!(user.is_active);
        // Plaintext never reaches the store
        assert_ne!(user.password_hash, "password123");
    }

    #[tokio::test]
    async fn test_register_user_duplicate_username() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_create().times(1).returning(|user| {
            Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ))
        });

        let service = UserService::new(Arc::new(repository));

        let command = RegisterUserCommand {
            username: Username::new("testuser".to_string()).unwrap(),
            email: EmailAddress::new("test2@example.com".to_string()).unwrap(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            password: "password456".to_string(),
            phone_number: "555-0100".to_string(),
        };

        let result = service.register_user(command).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::UsernameAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let result = service.get_user(&UserId(99)).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_user_by_username_success() {
        let mut repository = MockTestUserRepository::new();

        let expected = stored_user(1, "testuser");
        let returned = expected.clone();
        repository
            .expect_find_by_username()
            .withf(|u| u.as_str() == "testuser")
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = UserService::new(Arc::new(repository));

        let username = Username::new("testuser".to_string()).unwrap();
        let user = service.get_user_by_username(&username).await.unwrap();
        assert_eq!(user.id, expected.id);
    }

    #[tokio::test]
    async fn test_change_password_rehashes() {
        let mut repository = MockTestUserRepository::new();

        let existing = stored_user(7, "testuser");
        repository
            .expect_find_by_id()
            .withf(|id| *id == UserId(7))
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        repository
            .expect_update_password()
            .withf(|id, hash| *id == UserId(7) && hash.starts_with("$argon2"))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = UserService::new(Arc::new(repository));

        let result = service
            .change_password(&UserId(7), "new_password".to_string())
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_change_password_missing_user() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_update_password().times(0);

        let service = UserService::new(Arc::new(repository));

        let result = service
            .change_password(&UserId(99), "new_password".to_string())
            .await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_delete()
            .times(1)
            .returning(|id| Err(UserError::NotFound(id.to_string())));

        let service = UserService::new(Arc::new(repository));

        let result = service.delete_user(&UserId(99)).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }
}
