use async_trait::async_trait;

use crate::domain::address::errors::AddressError;
use crate::domain::address::models::Address;
use crate::domain::address::models::CreateAddressCommand;
use crate::domain::user::models::UserId;

/// Port for address domain service operations.
#[async_trait]
pub trait AddressServicePort: Send + Sync + 'static {
    /// Create an address and point the caller's identity at it.
    ///
    /// # Arguments
    /// * `command` - Address fields
    /// * `owner` - Identity to link the new address to
    ///
    /// # Returns
    /// Created address entity
    ///
    /// # Errors
    /// * `OwnerNotFound` - The resolved identity no longer exists
    /// * `DatabaseError` - Database operation failed
    async fn create_address_for_user(
        &self,
        command: CreateAddressCommand,
        owner: &UserId,
    ) -> Result<Address, AddressError>;
}

/// Persistence operations for the address entity.
#[async_trait]
pub trait AddressRepository: Send + Sync + 'static {
    /// Insert an address row and set the owner's address reference, as one
    /// transaction committed once.
    ///
    /// # Errors
    /// * `OwnerNotFound` - The owner row does not exist (transaction rolled back)
    /// * `DatabaseError` - Database operation failed
    async fn create_and_link(
        &self,
        command: CreateAddressCommand,
        owner: &UserId,
    ) -> Result<Address, AddressError>;
}
