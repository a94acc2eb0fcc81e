/// Authentication middleware support for Axum
///
/// The API server validates `Authorization: Bearer <token>` headers before any
/// handler logic runs. This module holds the pieces of that flow that are not
/// tied to the server's application state: header parsing, the authenticated
/// user context injected into request extensions, and the error type mapped to
/// 401/400 responses.
///
/// # Request Extensions
///
/// After successful authentication the middleware adds an [`AuthUser`] to the
/// request, which handlers extract with Axum's `Extension` extractor:
///
/// ```
/// use axum::Extension;
/// use issuetrack_shared::auth::middleware::AuthUser;
///
/// async fn handler(Extension(user): Extension<AuthUser>) -> String {
///     format!("Hello, {}!", user.email)
/// }
/// ```

use axum::{
    http::{header::HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated user context added to request extensions
///
/// Built from a validated token whose `user_id` claim resolved to a live user
/// row. A token for a deleted user never produces an `AuthUser`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    /// Authenticated user ID
    pub id: Uuid,

    /// Authenticated user email (token subject)
    pub email: String,
}

/// Error type for authentication middleware
#[derive(Debug)]
pub enum AuthError {
    /// Missing authorization header
    MissingCredentials,

    /// Invalid authorization header format
    InvalidFormat(String),

    /// Token validation failed (bad signature, expired, unknown user)
    InvalidToken(String),

    /// Database error while resolving the token subject
    DatabaseError(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::MissingCredentials => {
                (StatusCode::UNAUTHORIZED, "Missing credentials").into_response()
            }
            AuthError::InvalidFormat(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AuthError::InvalidToken(msg) => (StatusCode::UNAUTHORIZED, msg).into_response(),
            AuthError::DatabaseError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

/// Extracts the bearer token from request headers
///
/// # Errors
///
/// - `AuthError::MissingCredentials` if there is no Authorization header
/// - `AuthError::InvalidFormat` if the header is not a Bearer token
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let auth_header = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingCredentials)?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AuthError::InvalidFormat("Expected Bearer token".to_string()))
}
