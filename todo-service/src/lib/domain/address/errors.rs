use thiserror::Error;

/// Error for AddressId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressIdError {
    #[error("Invalid address id: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all address-related operations
#[derive(Debug, Clone, Error)]
pub enum AddressError {
    #[error("Invalid address ID: {0}")]
    InvalidAddressId(#[from] AddressIdError),

    /// The resolved identity no longer exists, so there is nothing to link
    /// the address to.
    #[error("Owner not found: {0}")]
    OwnerNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
