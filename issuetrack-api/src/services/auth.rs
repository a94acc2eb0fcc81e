/// Registration and login orchestration
///
/// Registration enforces email uniqueness and stores only the Argon2id hash
/// of the password. Login collapses "no such user" and "wrong password" into
/// one generic failure so responses don't reveal which part was wrong.

use crate::error::{ApiError, ApiResult};
use chrono::Duration;
use issuetrack_shared::{
    auth::{jwt, password},
    models::user::{CreateUser, User},
};
use sqlx::PgPool;

/// Registers a new user account
///
/// # Errors
///
/// - `Conflict` if the email is already registered
/// - `InternalError` if hashing or the database operation fails
pub async fn register(
    pool: &PgPool,
    name: String,
    email: String,
    plain_password: &str,
) -> ApiResult<User> {
    if User::find_by_email(pool, &email).await?.is_some() {
        return Err(ApiError::Conflict("Email already registered".to_string()));
    }

    let password_hash = password::hash_password(plain_password)?;

    let user = User::create(
        pool,
        CreateUser {
            name,
            email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = %user.id, "Registered new user");

    Ok(user)
}

/// Authenticates a user and issues an access token
///
/// Missing user and wrong password both produce the same 401 message, and a
/// stored hash that fails to parse verifies as false rather than erroring.
///
/// # Errors
///
/// - `Unauthorized` on bad credentials
/// - `InternalError` if token signing or the database operation fails
pub async fn login(
    pool: &PgPool,
    email: &str,
    plain_password: &str,
    jwt_secret: &str,
    ttl_minutes: i64,
) -> ApiResult<String> {
    let user = User::find_by_email(pool, email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid email or password".to_string()))?;

    if !password::verify_password(plain_password, &user.password_hash) {
        return Err(ApiError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let claims = jwt::Claims::with_ttl(user.id, &user.email, Duration::minutes(ttl_minutes));
    let token = jwt::create_token(&claims, jwt_secret)?;

    tracing::debug!(user_id = %user.id, "Issued access token");

    Ok(token)
}
