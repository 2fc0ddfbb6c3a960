use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::address::models::AddressId;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;
use crate::user::models::Username;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn from_row(row: &PgRow) -> Result<User, UserError> {
        Ok(User {
            id: UserId(
                row.try_get("user_id")
                    .map_err(|e| UserError::DatabaseError(e.to_string()))?,
            ),
            username: Username::new(
                row.try_get("username")
                    .map_err(|e| UserError::DatabaseError(e.to_string()))?,
            )?,
            email: EmailAddress::new(
                row.try_get("email")
                    .map_err(|e| UserError::DatabaseError(e.to_string()))?,
            )?,
            first_name: row
                .try_get("first_name")
                .map_err(|e| UserError::DatabaseError(e.to_string()))?,
            last_name: row
                .try_get("last_name")
                .map_err(|e| UserError::DatabaseError(e.to_string()))?,
            password_hash: row
                .try_get("hashed_password")
                .map_err(|e| UserError::DatabaseError(e.to_string()))?,
            is_active: row
                .try_get("is_active")
                .map_err(|e| UserError::DatabaseError(e.to_string()))?,
            phone_number: row
                .try_get("phone_number")
                .map_err(|e| UserError::DatabaseError(e.to_string()))?,
            address_id: row
                .try_get::<Option<i64>, _>("address_id")
                .map_err(|e| UserError::DatabaseError(e.to_string()))?
                .map(AddressId),
        })
    }
}

const USER_COLUMNS: &str =
    "user_id, username, email, first_name, last_name, hashed_password, is_active, \
     phone_number, address_id";

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (username, email, first_name, last_name, hashed_password, is_active, phone_number)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING user_id
            "#,
        )
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.password_hash)
        .bind(user.is_active)
        .bind(&user.phone_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    if db_err.constraint() == Some("users_username_key") {
                        return UserError::UsernameAlreadyExists(
                            user.username.as_str().to_string(),
                        );
                    }
                    if db_err.constraint() == Some("users_email_key") {
                        return UserError::EmailAlreadyExists(user.email.as_str().to_string());
                    }
                }
            }
            UserError::DatabaseError(e.to_string())
        })?;

        let id: i64 = row
            .try_get("user_id")
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(User {
            id: UserId(id),
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            password_hash: user.password_hash,
            is_active: user.is_active,
            phone_number: user.phone_number,
            address_id: None,
        })
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let row = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_id = $1"
        ))
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::from_row).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let row = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::from_row).transpose()
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let rows = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY user_id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::from_row).collect()
    }

    async fn update_password(&self, id: &UserId, password_hash: &str) -> Result<(), UserError> {
        let result = sqlx::query("UPDATE users SET hashed_password = $2 WHERE user_id = $1")
            .bind(id.as_i64())
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
