/// JWT token generation and validation module
///
/// Bearer tokens for issuetrack are self-contained JWTs signed with HS256
/// (HMAC-SHA256). Each token carries the subject email, the user id, and an
/// absolute expiry; tampering with any claim invalidates the signature.
///
/// # Security
///
/// - **Algorithm**: HS256 (HMAC with SHA-256)
/// - **Expiration**: 30 minutes by default, overridable per issuance
/// - **Validation**: Signature, expiration, and issuer checks
/// - **Secret Management**: Process-wide symmetric key, at least 32 bytes
///
/// # Example
///
/// ```
/// use issuetrack_shared::auth::jwt::{create_token, validate_token, Claims};
/// use uuid::Uuid;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let user_id = Uuid::new_v4();
/// let claims = Claims::new(user_id, "user@example.com");
/// let token = create_token(&claims, "your-secret-key-at-least-32-bytes")?;
///
/// let validated = validate_token(&token, "your-secret-key-at-least-32-bytes")?;
/// assert_eq!(validated.user_id, user_id);
/// assert_eq!(validated.sub, "user@example.com");
/// # Ok(())
/// # }
/// ```

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Issuer embedded in every token
const ISSUER: &str = "issuetrack";

/// Default access-token lifetime in minutes
pub const DEFAULT_TTL_MINUTES: i64 = 30;

/// Error type for JWT operations
///
/// All verification failures are typed, never panics: callers must treat any
/// failure as "unauthenticated", not as a system error.
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    /// Failed to create token
    #[error("Failed to create token: {0}")]
    CreateError(String),

    /// Token signature, format, or claims failed validation
    #[error("Failed to validate token: {0}")]
    ValidationError(String),

    /// Token has expired
    #[error("Token has expired")]
    Expired,

    /// Token was signed for a different issuer
    #[error("Invalid issuer")]
    InvalidIssuer,
}

/// JWT claims structure
///
/// # Standard Claims
///
/// - `sub`: Subject (user email)
/// - `iss`: Issuer (always "issuetrack")
/// - `iat`: Issued at timestamp
/// - `exp`: Expiration timestamp
///
/// # Custom Claims
///
/// - `user_id`: Primary key of the authenticated user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - user email
    pub sub: String,

    /// Issuer - always "issuetrack"
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// User ID (custom claim)
    pub user_id: Uuid,
}

impl Claims {
    /// Creates new claims with the default 30-minute expiration
    pub fn new(user_id: Uuid, email: &str) -> Self {
        Self::with_ttl(user_id, email, Duration::minutes(DEFAULT_TTL_MINUTES))
    }

    /// Creates claims with a custom time-to-live
    ///
    /// # Example
    ///
    /// ```
    /// use issuetrack_shared::auth::jwt::Claims;
    /// use chrono::Duration;
    /// use uuid::Uuid;
    ///
    /// let claims = Claims::with_ttl(Uuid::new_v4(), "a@x.com", Duration::hours(1));
    /// assert!(!claims.is_expired());
    /// ```
    pub fn with_ttl(user_id: Uuid, email: &str, ttl: Duration) -> Self {
        let now = Utc::now();
        let expiration = now + ttl;

        Self {
            sub: email.to_string(),
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            user_id,
        }
    }

    /// Checks if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Creates a JWT token from claims
///
/// Signs the whole payload with HS256 so any tampering with claims or expiry
/// invalidates the signature.
///
/// # Errors
///
/// Returns `JwtError::CreateError` if token encoding fails
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &key)
        .map_err(|e| JwtError::CreateError(format!("Token encoding failed: {}", e)))
}

/// Validates a JWT token and extracts its claims
///
/// Recomputes the signature over the untrusted payload and verifies:
/// - Signature matches
/// - Token has not expired
/// - Issuer is "issuetrack"
///
/// # Errors
///
/// Returns a typed error if the signature is invalid, the token is expired,
/// the issuer is wrong, or the token is malformed. Never panics on
/// attacker-controlled input.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    validation.validate_exp = true;

    let token_data = decode::<Claims>(token, &key, &validation).map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidIssuer => JwtError::InvalidIssuer,
        _ => JwtError::ValidationError(format!("Token validation failed: {}", e)),
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-at-least-32-bytes-long";

    #[test]
    fn test_claims_creation() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, "user@example.com");

        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.sub, "user@example.com");
        assert_eq!(claims.iss, "issuetrack");
        assert!(!claims.is_expired());
        // Default TTL is 30 minutes
        assert!(claims.exp - claims.iat >= 29 * 60);
        assert!(claims.exp - claims.iat <= 31 * 60);
    }

    #[test]
    fn test_create_and_validate_token() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, "user@example.com");
        let token = create_token(&claims, SECRET).expect("Should create token");

        let validated = validate_token(&token, SECRET).expect("Should validate token");
        assert_eq!(validated.user_id, user_id);
        assert_eq!(validated.sub, "user@example.com");
        assert_eq!(validated.iss, "issuetrack");
        assert_eq!(validated.exp, claims.exp);
    }

    #[test]
    fn test_validate_with_wrong_secret() {
        let claims = Claims::new(Uuid::new_v4(), "user@example.com");
        let token = create_token(&claims, "secret1-secret1-secret1-secret1!").unwrap();

        assert!(validate_token(&token, "wrong-secret-wrong-secret-wrong!").is_err());
    }

    #[test]
    fn test_validate_expired_token() {
        let claims = Claims::with_ttl(
            Uuid::new_v4(),
            "user@example.com",
            Duration::seconds(-3600), // already expired
        );

        assert!(claims.is_expired());

        let token = create_token(&claims, SECRET).unwrap();
        let result = validate_token(&token, SECRET);

        assert!(matches!(result, Err(JwtError::Expired)));
    }

    #[test]
    fn test_validate_tampered_token() {
        let claims = Claims::new(Uuid::new_v4(), "user@example.com");
        let token = create_token(&claims, SECRET).unwrap();

        // Flip a character in the payload segment
        let mut chars: Vec<char> = token.chars().collect();
        let mid = token.len() / 2;
        chars[mid] = if chars[mid] == 'A' { 'B' } else { 'A' };
        let tampered: String = chars.into_iter().collect();

        assert!(validate_token(&tampered, SECRET).is_err());
    }

    #[test]
    fn test_validate_malformed_token() {
        assert!(validate_token("not-a-jwt", SECRET).is_err());
        assert!(validate_token("", SECRET).is_err());
        assert!(validate_token("a.b.c", SECRET).is_err());
    }

    #[test]
    fn test_custom_ttl() {
        let claims = Claims::with_ttl(Uuid::new_v4(), "a@x.com", Duration::hours(2));
        assert!(claims.exp - claims.iat >= 2 * 3600 - 5);
        assert!(claims.exp - claims.iat <= 2 * 3600 + 5);
    }
}
