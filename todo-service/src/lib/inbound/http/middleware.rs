use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

/// Extension type to store the resolved identity in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
}

/// Middleware that resolves the calling identity from a bearer token.
///
/// Extracts the token from the Authorization header, validates signature and
/// expiry, and requires both the subject and id claims. Any failure stops the
/// request with 401 and a `WWW-Authenticate: Bearer` challenge; the inner
/// handler never runs.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    // Extract token from Authorization header
    let token = extract_token_from_header(&req)?;

    // Validate signature and expiry (from auth library)
    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!("Token validation failed: {}", e);
        unauthorized_response("Could not validate credentials")
    })?;

    // Both identity claims must be present
    let username = claims.sub.ok_or_else(|| {
        tracing::warn!("Missing 'sub' claim in token");
        unauthorized_response("Could not validate credentials")
    })?;

    let user_id = claims.id.map(UserId).ok_or_else(|| {
        tracing::warn!("Missing 'id' claim in token");
        unauthorized_response("Could not validate credentials")
    })?;

    // Add the resolved identity to request extensions
    req.extensions_mut()
        .insert(AuthenticatedUser { user_id, username });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| unauthorized_response("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized_response("Invalid Authorization header"))?;

    if !auth_str.starts_with("Bearer ") {
        return Err(unauthorized_response(
            "Invalid Authorization header format. Expected: Bearer <token>",
        ));
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}

fn unauthorized_response(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Bearer")],
        Json(json!({
            "status_code": StatusCode::UNAUTHORIZED.as_u16(),
            "data": { "message": message }
        })),
    )
        .into_response()
}
