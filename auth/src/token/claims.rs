use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Default token lifetime applied when the issuer does not pass one.
pub const DEFAULT_TTL_MINUTES: i64 = 15;

/// Claim set carried by an access token.
///
/// A token is a signed, self-contained assertion of identity: `sub` holds the
/// username, `id` the numeric user id, and `exp` the absolute expiry. `sub`
/// and `id` stay optional so a verifier can distinguish a structurally valid
/// token that lacks a required claim from one that fails signature checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessTokenClaims {
    /// Subject (username)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// User identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl AccessTokenClaims {
    /// Create claims for a user with an explicit time-to-live.
    ///
    /// # Arguments
    /// * `username` - Subject stored in `sub`
    /// * `user_id` - User identifier stored in `id`
    /// * `ttl` - Duration until the token expires
    ///
    /// # Returns
    /// Claims with sub, id, iat, and exp = now + ttl
    pub fn new(username: impl Into<String>, user_id: i64, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: Some(username.into()),
            id: Some(user_id),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        }
    }

    /// Create claims with the 15-minute default lifetime.
    pub fn with_default_ttl(username: impl Into<String>, user_id: i64) -> Self {
        Self::new(username, user_id, Duration::minutes(DEFAULT_TTL_MINUTES))
    }

    /// Check if the token is expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = AccessTokenClaims::new("alice", 7, Duration::minutes(20));

        assert_eq!(claims.sub, Some("alice".to_string()));
        assert_eq!(claims.id, Some(7));
        assert_eq!(claims.exp - claims.iat, 20 * 60);
    }

    #[test]
    fn test_default_ttl() {
        let claims = AccessTokenClaims::with_default_ttl("alice", 7);
        assert_eq!(claims.exp - claims.iat, DEFAULT_TTL_MINUTES * 60);
    }

    #[test]
    fn test_is_expired() {
        let mut claims = AccessTokenClaims::with_default_ttl("alice", 7);
        claims.exp = 1000;

        assert!(!claims.is_expired(999)); // Not expired
        assert!(!claims.is_expired(1000)); // Exactly at expiration
        assert!(claims.is_expired(1001)); // Expired
    }
}
