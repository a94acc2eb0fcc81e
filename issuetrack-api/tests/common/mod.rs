/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - Test database setup and cleanup
/// - Test user creation with a real password hash
/// - JWT token generation
/// - Request/response helpers

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use issuetrack_api::app::{build_router, AppState};
use issuetrack_api::config::Config;
use issuetrack_shared::auth::jwt::{create_token, Claims};
use issuetrack_shared::auth::password::hash_password;
use issuetrack_shared::models::user::{CreateUser, User};
use sqlx::PgPool;
use uuid::Uuid;

/// Password used for every test account
pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
    pub config: Config,
    pub user: User,
    pub jwt_token: String,
}

impl TestContext {
    /// Creates a new test context with a fresh user and a valid token
    pub async fn new() -> anyhow::Result<Self> {
        let config = Config::from_env()?;

        let db = PgPool::connect(&config.database.url).await?;

        // Run migrations (path relative to Cargo.toml, not this file)
        sqlx::migrate!("../migrations").run(&db).await?;

        let user = create_test_user(&db, "Test User").await?;

        let claims = Claims::new(user.id, &user.email);
        let jwt_token = create_token(&claims, &config.jwt.secret)?;

        let state = AppState::new(db.clone(), config.clone());
        let app = build_router(state);

        Ok(TestContext {
            db,
            app,
            config,
            user,
            jwt_token,
        })
    }

    /// Returns authorization header value for the context's user
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.jwt_token)
    }

    /// Issues a token for an arbitrary user, for cross-user access tests
    pub fn token_for(&self, user: &User) -> anyhow::Result<String> {
        let claims = Claims::new(user.id, &user.email);
        Ok(create_token(&claims, &self.config.jwt.secret)?)
    }

    /// Cleans up test data
    ///
    /// Deleting the user cascades to their projects and issues.
    pub async fn cleanup(&self) -> anyhow::Result<()> {
        User::delete(&self.db, self.user.id).await?;
        Ok(())
    }
}

/// Creates a user with a unique email and a real Argon2id hash
pub async fn create_test_user(db: &PgPool, name: &str) -> anyhow::Result<User> {
    let user = User::create(
        db,
        CreateUser {
            name: name.to_string(),
            email: format!("test-{}@example.com", Uuid::new_v4()),
            password_hash: hash_password(TEST_PASSWORD)?,
        },
    )
    .await?;

    Ok(user)
}

/// Sends a JSON request through the router and returns the response
pub async fn send_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    auth: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    use tower::Service as _;

    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }

    let body = match body {
        Some(json) => Body::from(json.to_string()),
        None => Body::empty(),
    };

    let request = builder.body(body).unwrap();
    app.clone().call(request).await.unwrap()
}

/// Reads and parses a JSON response body
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Asserts the response status, printing the body on mismatch
pub async fn expect_status(response: Response<Body>, expected: StatusCode) -> serde_json::Value {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body_str = String::from_utf8_lossy(&body);

    assert_eq!(status, expected, "unexpected status, body: {}", body_str);

    if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    }
}
