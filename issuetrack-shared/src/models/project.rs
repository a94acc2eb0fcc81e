/// Project model and database operations
///
/// Projects group issues and carry the ownership that the authorization
/// engine enforces: `owner_id` references exactly one user, and deleting a
/// project cascades to all of its issues.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE projects (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     name VARCHAR(200) NOT NULL,
///     description TEXT,
///     owner_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use issuetrack_shared::models::project::{CreateProject, Project};
/// use sqlx::PgPool;
/// use uuid::Uuid;
///
/// # async fn example(pool: PgPool, owner_id: Uuid) -> Result<(), sqlx::Error> {
/// let project = Project::create(&pool, CreateProject {
///     name: "P1".to_string(),
///     description: None,
///     owner_id,
/// }).await?;
///
/// let mine = Project::list_by_owner_with_counts(&pool, owner_id).await?;
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use super::double_option;

/// Project model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    /// Unique project ID
    pub id: Uuid,

    /// Project name
    pub name: String,

    /// Optional longer description
    pub description: Option<String>,

    /// Owning user; the single source of authority for this project
    /// and for every issue inside it
    pub owner_id: Uuid,

    /// When the project was created
    pub created_at: DateTime<Utc>,

    /// When the project was last updated
    pub updated_at: DateTime<Utc>,
}

/// Project annotated with its issue count
///
/// Returned by the list endpoint. Projects without issues report a count of
/// zero, not an absent field.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProjectWithIssueCount {
    /// Unique project ID
    pub id: Uuid,

    /// Project name
    pub name: String,

    /// Optional longer description
    pub description: Option<String>,

    /// Owning user
    pub owner_id: Uuid,

    /// When the project was created
    pub created_at: DateTime<Utc>,

    /// When the project was last updated
    pub updated_at: DateTime<Utc>,

    /// Number of issues in this project (0 if none)
    pub issue_count: i64,
}

/// Input for creating a new project
#[derive(Debug, Clone)]
pub struct CreateProject {
    /// Project name
    pub name: String,

    /// Optional description
    pub description: Option<String>,

    /// Owning user
    pub owner_id: Uuid,
}

/// Input for a partial project update
///
/// Only fields present in the payload are applied. `description` is nullable,
/// so it distinguishes "absent" (leave untouched) from an explicit `null`
/// (clear the column).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    /// New project name
    pub name: Option<String>,

    /// New description; `Some(None)` clears it
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

impl UpdateProject {
    /// Whether the payload carries any field at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

impl Project {
    /// Creates a new project
    pub async fn create(pool: &PgPool, data: CreateProject) -> Result<Self, sqlx::Error> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (name, description, owner_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, owner_id, created_at, updated_at
            "#,
        )
        .bind(data.name)
        .bind(data.description)
        .bind(data.owner_id)
        .fetch_one(pool)
        .await?;

        Ok(project)
    }

    /// Finds a project by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, name, description, owner_id, created_at, updated_at
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(project)
    }

    /// Lists a user's projects annotated with their issue counts
    ///
    /// Uses a LEFT JOIN so projects with zero issues still appear, with a
    /// count of 0.
    pub async fn list_by_owner_with_counts(
        pool: &PgPool,
        owner_id: Uuid,
    ) -> Result<Vec<ProjectWithIssueCount>, sqlx::Error> {
        let projects = sqlx::query_as::<_, ProjectWithIssueCount>(
            r#"
            SELECT p.id, p.name, p.description, p.owner_id, p.created_at, p.updated_at,
                   COUNT(i.id) AS issue_count
            FROM projects p
            LEFT JOIN issues i ON i.project_id = p.id
            WHERE p.owner_id = $1
            GROUP BY p.id
            ORDER BY p.created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await?;

        Ok(projects)
    }

    /// Applies a partial update to a project
    ///
    /// Only fields present in `data` are written; `updated_at` is refreshed on
    /// every call. Returns the updated project, or `None` if the row vanished
    /// (e.g. deleted concurrently), in which case callers fail closed with
    /// "not found".
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        data: UpdateProject,
    ) -> Result<Option<Self>, sqlx::Error> {
        // Build the UPDATE dynamically from the supplied fields
        let mut query = String::from("UPDATE projects SET updated_at = NOW()");
        let mut bind_count = 1;

        if data.name.is_some() {
            bind_count += 1;
            query.push_str(&format!(", name = ${}", bind_count));
        }
        if data.description.is_some() {
            bind_count += 1;
            query.push_str(&format!(", description = ${}", bind_count));
        }

        query.push_str(
            " WHERE id = $1 RETURNING id, name, description, owner_id, created_at, updated_at",
        );

        let mut q = sqlx::query_as::<_, Project>(&query).bind(id);

        if let Some(name) = data.name {
            q = q.bind(name);
        }
        if let Some(description) = data.description {
            q = q.bind(description);
        }

        let project = q.fetch_optional(pool).await?;

        Ok(project)
    }

    /// Deletes a project by ID
    ///
    /// Cascades to all issues in the project.
    ///
    /// # Returns
    ///
    /// True if a project was deleted, false if no such project existed
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_project_default_is_empty() {
        let update = UpdateProject::default();
        assert!(update.is_empty());
    }

    #[test]
    fn test_update_project_absent_vs_null_description() {
        // Absent: leave the description untouched
        let update: UpdateProject = serde_json::from_str(r#"{"name": "Renamed"}"#).unwrap();
        assert_eq!(update.name.as_deref(), Some("Renamed"));
        assert_eq!(update.description, None);

        // Explicit null: clear the description
        let update: UpdateProject = serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(update.name, None);
        assert_eq!(update.description, Some(None));

        // Value: replace the description
        let update: UpdateProject =
            serde_json::from_str(r#"{"description": "new text"}"#).unwrap();
        assert_eq!(update.description, Some(Some("new text".to_string())));
    }
}
