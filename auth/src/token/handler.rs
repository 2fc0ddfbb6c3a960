use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::AccessTokenClaims;
use super::errors::TokenError;

/// Access token handler for encoding and decoding signed tokens.
///
/// Uses HS256 (HMAC with SHA-256); the same symmetric secret is shared by
/// issuer and verifier.
pub struct TokenHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenHandler {
    /// Create a new token handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Returns
    /// TokenHandler instance configured with HS256 algorithm
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a signed token.
    ///
    /// # Arguments
    /// * `claims` - Claim set to encode
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &AccessTokenClaims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token.
    ///
    /// Checks the signature and the `exp` claim against the current time,
    /// with no expiry leeway.
    ///
    /// # Arguments
    /// * `token` - Token string to decode
    ///
    /// # Returns
    /// Decoded claim set
    ///
    /// # Errors
    /// * `TokenExpired` - The `exp` claim has passed
    /// * `DecodingFailed` - Signature invalid or token malformed
    pub fn decode(&self, token: &str) -> Result<AccessTokenClaims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data = decode::<AccessTokenClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                _ => TokenError::DecodingFailed(e.to_string()),
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::Utc;

    use super::*;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    #[test]
    fn test_encode_and_decode() {
        let handler = TokenHandler::new(SECRET);
        let claims = AccessTokenClaims::new("alice", 42, Duration::minutes(20));

        let token = handler.encode(&claims).expect("Failed to encode token");
        assert!(!token.is_empty());

        let decoded = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_decode_invalid_token() {
        let handler = TokenHandler::new(SECRET);

        let result = handler.decode("invalid.token.here");
        assert!(matches!(result, Err(TokenError::DecodingFailed(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler1 = TokenHandler::new(b"secret1_at_least_32_bytes_long_key!");
        let handler2 = TokenHandler::new(b"secret2_at_least_32_bytes_long_key!");

        let claims = AccessTokenClaims::with_default_ttl("alice", 42);
        let token = handler1.encode(&claims).expect("Failed to encode token");

        let result = handler2.decode(&token);
        assert!(matches!(result, Err(TokenError::DecodingFailed(_))));
    }

    #[test]
    fn test_decode_accepts_before_expiry() {
        let handler = TokenHandler::new(SECRET);

        // Expires well in the future; must decode now
        let claims = AccessTokenClaims::new("alice", 42, Duration::minutes(15));
        let token = handler.encode(&claims).expect("Failed to encode token");
        assert!(handler.decode(&token).is_ok());
    }

    #[test]
    fn test_decode_rejects_after_expiry() {
        let handler = TokenHandler::new(SECRET);

        // Already-expired claim set
        let now = Utc::now();
        let claims = AccessTokenClaims {
            sub: Some("alice".to_string()),
            id: Some(42),
            exp: (now - Duration::seconds(5)).timestamp(),
            iat: (now - Duration::minutes(20)).timestamp(),
        };
        let token = handler.encode(&claims).expect("Failed to encode token");

        let result = handler.decode(&token);
        assert!(matches!(result, Err(TokenError::TokenExpired)));
    }
}
