//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for services:
//! - Password hashing (Argon2id)
//! - Access token generation and validation (HS256)
//! - Authentication coordination
//!
//! Each service defines its own authentication middleware and adapts these
//! implementations. This avoids coupling services through shared domain logic
//! while reducing code duplication.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{TokenHandler, AccessTokenClaims};
//!
//! let handler = TokenHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = AccessTokenClaims::with_default_ttl("alice", 42);
//! let token = handler.encode(&claims).unwrap();
//! let decoded = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub.as_deref(), Some("alice"));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, AccessTokenClaims};
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let claims = AccessTokenClaims::new("alice", 42, Duration::minutes(20));
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! // Validate token
//! let decoded = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.id, Some(42));
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::AccessTokenClaims;
pub use token::TokenError;
pub use token::TokenHandler;
