/// Project orchestration
///
/// Every operation that takes a project ID runs `require_project_access`
/// first, so missing projects report 404 and someone else's projects report
/// 403 before any read or write happens. Listing never needs the check: it is
/// scoped to the caller's own projects by construction.

use crate::error::{ApiError, ApiResult};
use issuetrack_shared::{
    auth::authorization::require_project_access,
    models::project::{CreateProject, Project, ProjectWithIssueCount, UpdateProject},
};
use sqlx::PgPool;
use uuid::Uuid;

/// Creates a project owned by the caller
pub async fn create_project(
    pool: &PgPool,
    owner_id: Uuid,
    name: String,
    description: Option<String>,
) -> ApiResult<Project> {
    let project = Project::create(
        pool,
        CreateProject {
            name,
            description,
            owner_id,
        },
    )
    .await?;

    tracing::info!(project_id = %project.id, owner_id = %owner_id, "Created project");

    Ok(project)
}

/// Lists the caller's projects, newest first, with issue counts
pub async fn list_projects(
    pool: &PgPool,
    owner_id: Uuid,
) -> ApiResult<Vec<ProjectWithIssueCount>> {
    Ok(Project::list_by_owner_with_counts(pool, owner_id).await?)
}

/// Fetches a single project the caller owns
pub async fn get_project(pool: &PgPool, project_id: Uuid, user_id: Uuid) -> ApiResult<Project> {
    Ok(require_project_access(pool, project_id, user_id).await?)
}

/// Applies a partial update to a project the caller owns
///
/// If the row disappears between the access check and the update (concurrent
/// delete), the operation fails closed with 404.
pub async fn update_project(
    pool: &PgPool,
    project_id: Uuid,
    user_id: Uuid,
    data: UpdateProject,
) -> ApiResult<Project> {
    require_project_access(pool, project_id, user_id).await?;

    Project::update(pool, project_id, data)
        .await?
        .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))
}

/// Deletes a project the caller owns, cascading to its issues
pub async fn delete_project(pool: &PgPool, project_id: Uuid, user_id: Uuid) -> ApiResult<()> {
    require_project_access(pool, project_id, user_id).await?;

    let deleted = Project::delete(pool, project_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Project not found".to_string()));
    }

    tracing::info!(project_id = %project_id, "Deleted project");

    Ok(())
}
