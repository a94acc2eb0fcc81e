/// Issue model and database operations
///
/// Issues are the leaf of the ownership chain: each belongs to exactly one
/// project and records exactly one creator. Access rights to an issue are
/// always derived from its parent project's owner and are never stored on the
/// issue row.
///
/// # Schema
///
/// ```sql
/// CREATE TYPE issue_status AS ENUM ('Open', 'In Progress', 'Closed');
/// CREATE TYPE issue_priority AS ENUM ('Low', 'Medium', 'High');
///
/// CREATE TABLE issues (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     project_id UUID NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
///     title VARCHAR(300) NOT NULL,
///     description TEXT,
///     status issue_status NOT NULL DEFAULT 'Open',
///     priority issue_priority NOT NULL DEFAULT 'Medium',
///     creator_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use issuetrack_shared::models::issue::{CreateIssue, Issue, IssuePriority, IssueStatus};
/// use sqlx::PgPool;
/// use uuid::Uuid;
///
/// # async fn example(pool: PgPool, project_id: Uuid, creator_id: Uuid) -> Result<(), sqlx::Error> {
/// let issue = Issue::create(&pool, CreateIssue {
///     project_id,
///     title: "Bug".to_string(),
///     description: None,
///     status: IssueStatus::Open,
///     priority: IssuePriority::Medium,
///     creator_id,
/// }).await?;
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use super::double_option;

/// Issue status, a closed enumeration
///
/// Serialized to/from its canonical string form: "Open", "In Progress",
/// "Closed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "issue_status")]
pub enum IssueStatus {
    /// Newly reported, default on creation
    Open,

    /// Being worked on
    #[serde(rename = "In Progress")]
    #[sqlx(rename = "In Progress")]
    InProgress,

    /// Resolved or discarded
    Closed,
}

impl IssueStatus {
    /// Canonical string form
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Open => "Open",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Closed => "Closed",
        }
    }
}

impl Default for IssueStatus {
    fn default() -> Self {
        IssueStatus::Open
    }
}

/// Issue priority, a closed enumeration
///
/// Serialized to/from its canonical string form: "Low", "Medium", "High".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "issue_priority")]
pub enum IssuePriority {
    Low,
    Medium,
    High,
}

impl IssuePriority {
    /// Canonical string form
    pub fn as_str(&self) -> &'static str {
        match self {
            IssuePriority::Low => "Low",
            IssuePriority::Medium => "Medium",
            IssuePriority::High => "High",
        }
    }
}

impl Default for IssuePriority {
    fn default() -> Self {
        IssuePriority::Medium
    }
}

/// Issue model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Issue {
    /// Unique issue ID
    pub id: Uuid,

    /// Parent project; access rights derive from its owner
    pub project_id: Uuid,

    /// Issue title
    pub title: String,

    /// Optional detailed description
    pub description: Option<String>,

    /// Current status
    pub status: IssueStatus,

    /// Current priority
    pub priority: IssuePriority,

    /// User who created the issue
    pub creator_id: Uuid,

    /// When the issue was created
    pub created_at: DateTime<Utc>,

    /// When the issue was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new issue
#[derive(Debug, Clone)]
pub struct CreateIssue {
    /// Parent project
    pub project_id: Uuid,

    /// Issue title
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Initial status (Open unless the caller overrides)
    pub status: IssueStatus,

    /// Initial priority (Medium unless the caller overrides)
    pub priority: IssuePriority,

    /// Creating user
    pub creator_id: Uuid,
}

/// Input for a partial issue update
///
/// Only fields present in the payload are applied; absent fields are left
/// untouched. `description` is nullable and distinguishes absence from an
/// explicit `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateIssue {
    /// New title
    pub title: Option<String>,

    /// New description; `Some(None)` clears it
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,

    /// New status
    pub status: Option<IssueStatus>,

    /// New priority
    pub priority: Option<IssuePriority>,
}

impl UpdateIssue {
    /// Whether the payload carries any field at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
    }
}

/// Optional filters for listing a project's issues
///
/// Both filters are independently optional; when both are given they combine
/// with AND.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct IssueFilter {
    /// Only issues with this status
    pub status: Option<IssueStatus>,

    /// Only issues with this priority
    pub priority: Option<IssuePriority>,
}

impl Issue {
    /// Creates a new issue in a project
    pub async fn create(pool: &PgPool, data: CreateIssue) -> Result<Self, sqlx::Error> {
        let issue = sqlx::query_as::<_, Issue>(
            r#"
            INSERT INTO issues (project_id, title, description, status, priority, creator_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, project_id, title, description, status, priority, creator_id,
                      created_at, updated_at
            "#,
        )
        .bind(data.project_id)
        .bind(data.title)
        .bind(data.description)
        .bind(data.status)
        .bind(data.priority)
        .bind(data.creator_id)
        .fetch_one(pool)
        .await?;

        Ok(issue)
    }

    /// Finds an issue by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let issue = sqlx::query_as::<_, Issue>(
            r#"
            SELECT id, project_id, title, description, status, priority, creator_id,
                   created_at, updated_at
            FROM issues
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(issue)
    }

    /// Lists a project's issues with optional status/priority filters
    ///
    /// Filters combine with AND when both are present. Results are ordered
    /// newest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: Uuid,
        filter: IssueFilter,
    ) -> Result<Vec<Self>, sqlx::Error> {
        // Build the WHERE clause dynamically from the supplied filters
        let mut query = String::from(
            "SELECT id, project_id, title, description, status, priority, creator_id, \
             created_at, updated_at FROM issues WHERE project_id = $1",
        );
        let mut bind_count = 1;

        if filter.status.is_some() {
            bind_count += 1;
            query.push_str(&format!(" AND status = ${}", bind_count));
        }
        if filter.priority.is_some() {
            bind_count += 1;
            query.push_str(&format!(" AND priority = ${}", bind_count));
        }

        query.push_str(" ORDER BY created_at DESC");

        let mut q = sqlx::query_as::<_, Issue>(&query).bind(project_id);

        if let Some(status) = filter.status {
            q = q.bind(status);
        }
        if let Some(priority) = filter.priority {
            q = q.bind(priority);
        }

        let issues = q.fetch_all(pool).await?;

        Ok(issues)
    }

    /// Applies a partial update to an issue
    ///
    /// Only fields present in `data` are written; `updated_at` is refreshed on
    /// every call. Returns `None` if the row vanished, so callers fail closed
    /// with "not found" instead of acting on stale data.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        data: UpdateIssue,
    ) -> Result<Option<Self>, sqlx::Error> {
        let mut query = String::from("UPDATE issues SET updated_at = NOW()");
        let mut bind_count = 1;

        if data.title.is_some() {
            bind_count += 1;
            query.push_str(&format!(", title = ${}", bind_count));
        }
        if data.description.is_some() {
            bind_count += 1;
            query.push_str(&format!(", description = ${}", bind_count));
        }
        if data.status.is_some() {
            bind_count += 1;
            query.push_str(&format!(", status = ${}", bind_count));
        }
        if data.priority.is_some() {
            bind_count += 1;
            query.push_str(&format!(", priority = ${}", bind_count));
        }

        query.push_str(
            " WHERE id = $1 RETURNING id, project_id, title, description, status, priority, \
             creator_id, created_at, updated_at",
        );

        let mut q = sqlx::query_as::<_, Issue>(&query).bind(id);

        if let Some(title) = data.title {
            q = q.bind(title);
        }
        if let Some(description) = data.description {
            q = q.bind(description);
        }
        if let Some(status) = data.status {
            q = q.bind(status);
        }
        if let Some(priority) = data.priority {
            q = q.bind(priority);
        }

        let issue = q.fetch_optional(pool).await?;

        Ok(issue)
    }

    /// Deletes an issue by ID
    ///
    /// # Returns
    ///
    /// True if an issue was deleted, false if no such issue existed
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM issues WHERE id = $1")
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
    fn test_status_as_str() {
        assert_eq!(IssueStatus::Open.as_str(), "Open");
        assert_eq!(IssueStatus::InProgress.as_str(), "In Progress");
        assert_eq!(IssueStatus::Closed.as_str(), "Closed");
    }

    #[test]
    fn test_priority_as_str() {
        assert_eq!(IssuePriority::Low.as_str(), "Low");
        assert_eq!(IssuePriority::Medium.as_str(), "Medium");
        assert_eq!(IssuePriority::High.as_str(), "High");
    }

    #[test]
    fn test_status_serde_canonical_strings() {
        assert_eq!(
            serde_json::to_string(&IssueStatus::InProgress).unwrap(),
            r#""In Progress""#
        );
        let status: IssueStatus = serde_json::from_str(r#""In Progress""#).unwrap();
        assert_eq!(status, IssueStatus::InProgress);

        // Unknown values are rejected, the enumeration is closed
        assert!(serde_json::from_str::<IssueStatus>(r#""Reopened""#).is_err());
        assert!(serde_json::from_str::<IssuePriority>(r#""Urgent""#).is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(IssueStatus::default(), IssueStatus::Open);
        assert_eq!(IssuePriority::default(), IssuePriority::Medium);
    }

    #[test]
    fn test_update_issue_absent_vs_null() {
        // Only status supplied: everything else untouched
        let update: UpdateIssue = serde_json::from_str(r#"{"status": "Closed"}"#).unwrap();
        assert_eq!(update.status, Some(IssueStatus::Closed));
        assert_eq!(update.title, None);
        assert_eq!(update.description, None);
        assert_eq!(update.priority, None);

        // Explicit null clears the description
        let update: UpdateIssue = serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(update.description, Some(None));

        let update: UpdateIssue = serde_json::from_str("{}").unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn test_issue_filter_from_query() {
        let filter: IssueFilter =
            serde_json::from_str(r#"{"status": "Open", "priority": "High"}"#).unwrap();
        assert_eq!(filter.status, Some(IssueStatus::Open));
        assert_eq!(filter.priority, Some(IssuePriority::High));

        let filter: IssueFilter = serde_json::from_str("{}").unwrap();
        assert!(filter.status.is_none());
        assert!(filter.priority.is_none());
    }
}
