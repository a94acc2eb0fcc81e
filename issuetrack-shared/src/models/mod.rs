/// Database models for issuetrack
///
/// This module contains all database models and their CRUD operations.
///
/// # Models
///
/// - `user`: User accounts (identity, unique email, password hash)
/// - `project`: Projects owned by a single user
/// - `issue`: Issues scoped to a project, with status and priority
///
/// # Example
///
/// ```no_run
/// use issuetrack_shared::models::user::{CreateUser, User};
/// use issuetrack_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(&pool, CreateUser {
///     name: "Alice".to_string(),
///     email: "alice@example.com".to_string(),
///     password_hash: "$argon2id$...".to_string(),
/// }).await?;
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Deserializer};

pub mod issue;
pub mod project;
pub mod user;

/// Deserializes a field that distinguishes "absent" from "explicit null"
///
/// Plain `Option<Option<T>>` collapses JSON `null` into the outer `None`.
/// With this helper plus `#[serde(default)]`, an absent field stays `None`
/// while `"field": null` becomes `Some(None)`, which partial updates use to
/// clear nullable columns.
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        description: Option<Option<String>>,
    }

    #[test]
    fn test_double_option_absent() {
        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.description, None);
    }

    #[test]
    fn test_double_option_null() {
        let patch: Patch = serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(patch.description, Some(None));
    }

    #[test]
    fn test_double_option_value() {
        let patch: Patch = serde_json::from_str(r#"{"description": "hi"}"#).unwrap();
        assert_eq!(patch.description, Some(Some("hi".to_string())));
    }
}
