use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::address::errors::AddressError;
use crate::domain::address::models::Address;
use crate::domain::address::models::AddressId;
use crate::domain::address::models::CreateAddressCommand;
use crate::domain::address::ports::AddressRepository;
use crate::domain::user::models::UserId;

pub struct PostgresAddressRepository {
    pool: PgPool,
}

impl PostgresAddressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddressRepository for PostgresAddressRepository {
    async fn create_and_link(
        &self,
        command: CreateAddressCommand,
        owner: &UserId,
    ) -> Result<Address, AddressError> {
        // Insert and link commit together or not at all
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AddressError::DatabaseError(e.to_string()))?;

        let row = sqlx::query(
            r#"
            INSERT INTO address (address1, address2, apt_num, city, state, country, postalcode)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&command.address1)
        .bind(&command.address2)
        .bind(&command.apt_num)
        .bind(&command.city)
        .bind(&command.state)
        .bind(&command.country)
        .bind(&command.postalcode)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AddressError::DatabaseError(e.to_string()))?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| AddressError::DatabaseError(e.to_string()))?;

        let result = sqlx::query("UPDATE users SET address_id = $2 WHERE user_id = $1")
            .bind(owner.as_i64())
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AddressError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            tx.rollback()
                .await
                .map_err(|e| AddressError::DatabaseError(e.to_string()))?;
            return Err(AddressError::OwnerNotFound(owner.to_string()));
        }

        tx.commit()
            .await
            .map_err(|e| AddressError::DatabaseError(e.to_string()))?;

        Ok(Address {
            id: AddressId(id),
            address1: command.address1,
            address2: command.address2,
            apt_num: command.apt_num,
            city: command.city,
            state: command.state,
            country: command.country,
            postalcode: command.postalcode,
        })
    }
}
