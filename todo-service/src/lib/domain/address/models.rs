use std::fmt;
use std::str::FromStr;

use crate::domain::address::errors::AddressIdError;

/// Postal address entity.
///
/// Addresses are shared resources: several identities may reference the same
/// row, and nothing enforces uniqueness.
#[derive(Debug, Clone)]
pub struct Address {
    pub id: AddressId,
    pub address1: String,
    pub address2: Option<String>,
    pub apt_num: Option<String>,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postalcode: String,
}

/// Address unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressId(pub i64);

impl AddressId {
    /// Parse an address ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid integer id
    pub fn from_string(s: &str) -> Result<Self, AddressIdError> {
        i64::from_str(s)
            .map(AddressId)
            .map_err(|e| AddressIdError::InvalidFormat(e.to_string()))
    }

    /// Get the raw integer value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AddressId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create an address and link it to the calling identity.
#[derive(Debug)]
pub struct CreateAddressCommand {
    pub address1: String,
    pub address2: Option<String>,
    pub apt_num: Option<String>,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postalcode: String,
}
