/// Issue orchestration
///
/// Issue rights are always derived from the parent project's owner. Routes
/// that address an issue by its own ID go through `require_issue_access`,
/// which resolves the issue, then the project, then the owner. Routes scoped
/// under a project go through `require_project_access` on the parent.

use crate::error::{ApiError, ApiResult};
use issuetrack_shared::{
    auth::authorization::{require_issue_access, require_project_access},
    models::issue::{CreateIssue, Issue, IssueFilter, IssuePriority, IssueStatus, UpdateIssue},
};
use sqlx::PgPool;
use uuid::Uuid;

/// Creates an issue inside a project the caller owns
///
/// Status and priority fall back to Open/Medium when the caller omits them.
pub async fn create_issue(
    pool: &PgPool,
    project_id: Uuid,
    user_id: Uuid,
    title: String,
    description: Option<String>,
    status: Option<IssueStatus>,
    priority: Option<IssuePriority>,
) -> ApiResult<Issue> {
    require_project_access(pool, project_id, user_id).await?;

    let issue = Issue::create(
        pool,
        CreateIssue {
            project_id,
            title,
            description,
            status: status.unwrap_or_default(),
            priority: priority.unwrap_or_default(),
            creator_id: user_id,
        },
    )
    .await?;

    tracing::info!(issue_id = %issue.id, project_id = %project_id, "Created issue");

    Ok(issue)
}

/// Lists a project's issues with optional status/priority filters
pub async fn list_issues(
    pool: &PgPool,
    project_id: Uuid,
    user_id: Uuid,
    filter: IssueFilter,
) -> ApiResult<Vec<Issue>> {
    require_project_access(pool, project_id, user_id).await?;

    Ok(Issue::list_by_project(pool, project_id, filter).await?)
}

/// Fetches a single issue in a project the caller owns
pub async fn get_issue(pool: &PgPool, issue_id: Uuid, user_id: Uuid) -> ApiResult<Issue> {
    Ok(require_issue_access(pool, issue_id, user_id).await?)
}

/// Applies a partial update to an issue in a project the caller owns
///
/// Fails closed with 404 if the row disappears between the access check and
/// the update.
pub async fn update_issue(
    pool: &PgPool,
    issue_id: Uuid,
    user_id: Uuid,
    data: UpdateIssue,
) -> ApiResult<Issue> {
    require_issue_access(pool, issue_id, user_id).await?;

    Issue::update(pool, issue_id, data)
        .await?
        .ok_or_else(|| ApiError::NotFound("Issue not found".to_string()))
}

/// Deletes an issue in a project the caller owns
pub async fn delete_issue(pool: &PgPool, issue_id: Uuid, user_id: Uuid) -> ApiResult<()> {
    require_issue_access(pool, issue_id, user_id).await?;

    let deleted = Issue::delete(pool, issue_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Issue not found".to_string()));
    }

    tracing::info!(issue_id = %issue_id, "Deleted issue");

    Ok(())
}
