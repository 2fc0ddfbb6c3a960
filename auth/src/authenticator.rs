use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::AccessTokenClaims;
use crate::token::TokenError;
use crate::token::TokenHandler;

/// Authentication coordinator combining password verification and token
/// generation.
///
/// Provides high-level authentication operations by coordinating password
/// hashing and access token handling.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_handler: TokenHandler,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `token_secret` - Secret key for token signing
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(token_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_handler: TokenHandler::new(token_secret),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Hashed password string
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and generate an access token.
    ///
    /// A stored hash that fails to verify, for any reason, yields
    /// `InvalidCredentials`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `claims` - Claim set to encode in the token
    ///
    /// # Returns
    /// AuthenticationResult with access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `TokenError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        claims: &AccessTokenClaims,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_handler.encode(claims)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Generate an access token without password verification.
    ///
    /// Useful when authentication has already been verified by other means.
    ///
    /// # Arguments
    /// * `claims` - Claim set to encode
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `TokenError` - Token generation failed
    pub fn generate_token(&self, claims: &AccessTokenClaims) -> Result<String, TokenError> {
        self.token_handler.encode(claims)
    }

    /// Validate and decode an access token.
    ///
    /// # Arguments
    /// * `token` - Token string
    ///
    /// # Returns
    /// Decoded claim set
    ///
    /// # Errors
    /// * `TokenError` - Token validation or decoding failed
    pub fn validate_token(&self, token: &str) -> Result<AccessTokenClaims, TokenError> {
        self.token_handler.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new(b"test_secret_key_at_least_32_bytes!");

        // Hash a password
        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        // Authenticate with correct password
        let claims = AccessTokenClaims::new("alice", 42, Duration::minutes(20));
        let result = authenticator
            .authenticate(password, &hash, &claims)
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        // Validate the token
        let decoded = authenticator
            .validate_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(decoded.sub, Some("alice".to_string()));
        assert_eq!(decoded.id, Some(42));
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = Authenticator::new(b"test_secret_key_at_least_32_bytes!");

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let claims = AccessTokenClaims::with_default_ttl("alice", 42);

        // Try with wrong password
        let result = authenticator.authenticate("wrong_password", &hash, &claims);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_malformed_stored_hash() {
        let authenticator = Authenticator::new(b"test_secret_key_at_least_32_bytes!");

        let claims = AccessTokenClaims::with_default_ttl("alice", 42);

        // A corrupt stored hash behaves as a non-match, not an error
        let result = authenticator.authenticate("password", "corrupt-hash", &claims);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_generate_and_validate_token() {
        let authenticator = Authenticator::new(b"test_secret_key_at_least_32_bytes!");

        let claims = AccessTokenClaims::with_default_ttl("alice", 42);

        let token = authenticator
            .generate_token(&claims)
            .expect("Failed to generate token");

        let decoded = authenticator
            .validate_token(&token)
            .expect("Failed to validate token");

        assert_eq!(decoded.sub, Some("alice".to_string()));
        assert_eq!(decoded.id, Some(42));
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = Authenticator::new(b"test_secret_key_at_least_32_bytes!");

        let result = authenticator.validate_token("invalid.token.here");
        assert!(result.is_err());
    }
}
