use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::address::errors::AddressError;
use crate::domain::address::models::Address;
use crate::domain::address::models::CreateAddressCommand;
use crate::domain::address::ports::AddressRepository;
use crate::domain::address::ports::AddressServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for address operations.
pub struct AddressService<AR>
where
    AR: AddressRepository,
{
    repository: Arc<AR>,
}

impl<AR> AddressService<AR>
where
    AR: AddressRepository,
{
    /// Create a new address service with an injected repository.
    pub fn new(repository: Arc<AR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<AR> AddressServicePort for AddressService<AR>
where
    AR: AddressRepository,
{
    async fn create_address_for_user(
        &self,
        command: CreateAddressCommand,
        owner: &UserId,
    ) -> Result<Address, AddressError> {
        self.repository.create_and_link(command, owner).await
    }
}
