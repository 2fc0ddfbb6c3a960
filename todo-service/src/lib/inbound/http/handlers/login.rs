use auth::AccessTokenClaims;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Form;
use chrono::Duration;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Tokens issued at login outlive the library's 15-minute default on
/// purpose.
const LOGIN_TOKEN_TTL_MINUTES: i64 = 20;

pub async fn login(
    State(state): State<AppState>,
    Form(body): Form<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    // A malformed username can never match a stored credential
    let username = Username::new(body.username)
        .map_err(|_| ApiError::Unauthorized("Incorrect username or password".to_string()))?;

    // Get user from database
    let user = state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByUsername(_) => {
                ApiError::Unauthorized("Incorrect username or password".to_string())
            }
            _ => ApiError::from(e),
        })?;

    // Fixed login lifetime, independent of the library default
    let claims = AccessTokenClaims::new(
        user.username.as_str(),
        user.id.as_i64(),
        Duration::minutes(LOGIN_TOKEN_TTL_MINUTES),
    );

    // Verify password and generate token
    let result = state
        .authenticator
        .authenticate(&body.password, &user.password_hash, &claims)
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                ApiError::Unauthorized("Incorrect username or password".to_string())
            }
            auth::AuthenticationError::PasswordError(err) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", err))
            }
            auth::AuthenticationError::TokenError(err) => {
                ApiError::InternalServerError(format!("Token generation failed: {}", err))
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            token: result.access_token,
        },
    ))
}

/// Form-encoded credentials, OAuth2 password-flow style
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}
