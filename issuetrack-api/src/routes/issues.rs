/// Issue endpoints
///
/// Creation and listing are nested under the parent project
/// (`/projects/:id/issues`); reads, updates, and deletes address issues by
/// their own ID. In both shapes the access check resolves to the parent
/// project's owner before any data is touched.
///
/// # Endpoints
///
/// - `GET /projects/:id/issues?status=&priority=` - List issues with filters
/// - `POST /projects/:id/issues` - Create an issue
/// - `GET /issues/:id` - Fetch an issue
/// - `PATCH /issues/:id` - Partial update
/// - `DELETE /issues/:id` - Delete an issue

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    services,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use issuetrack_shared::{
    auth::middleware::AuthUser,
    models::issue::{Issue, IssueFilter, IssuePriority, IssueStatus, UpdateIssue},
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Create issue request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateIssueRequest {
    /// Issue title
    #[validate(length(min = 1, max = 300, message = "Title must be 1-300 characters"))]
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Initial status, defaults to Open
    pub status: Option<IssueStatus>,

    /// Initial priority, defaults to Medium
    pub priority: Option<IssuePriority>,
}

/// Partial update request
///
/// Absent fields are left untouched; `"description": null` clears it.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateIssueRequest {
    /// New title
    #[validate(length(min = 1, max = 300, message = "Title must be 1-300 characters"))]
    pub title: Option<String>,

    /// New description; explicit `null` clears it
    #[serde(default, deserialize_with = "issuetrack_shared::models::double_option")]
    pub description: Option<Option<String>>,

    /// New status
    pub status: Option<IssueStatus>,

    /// New priority
    pub priority: Option<IssuePriority>,
}

/// List a project's issues, optionally filtered by status and priority
///
/// Filters combine with AND; an empty query string returns everything,
/// newest first.
pub async fn list_issues(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(project_id): Path<Uuid>,
    Query(filter): Query<IssueFilter>,
) -> ApiResult<Json<Vec<Issue>>> {
    let issues = services::issue::list_issues(&state.db, project_id, user.id, filter).await?;
    Ok(Json(issues))
}

/// Create an issue in a project
pub async fn create_issue(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(project_id): Path<Uuid>,
    Json(req): Json<CreateIssueRequest>,
) -> ApiResult<(StatusCode, Json<Issue>)> {
    req.validate().map_err(ApiError::from)?;

    let issue = services::issue::create_issue(
        &state.db,
        project_id,
        user.id,
        req.title,
        req.description,
        req.status,
        req.priority,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(issue)))
}

/// Fetch a single issue
pub async fn get_issue(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Issue>> {
    let issue = services::issue::get_issue(&state.db, id, user.id).await?;
    Ok(Json(issue))
}

/// Apply a partial update to an issue
pub async fn update_issue(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateIssueRequest>,
) -> ApiResult<Json<Issue>> {
    req.validate().map_err(ApiError::from)?;

    let data = UpdateIssue {
        title: req.title,
        description: req.description,
        status: req.status,
        priority: req.priority,
    };

    let issue = services::issue::update_issue(&state.db, id, user.id, data).await?;
    Ok(Json(issue))
}

/// Delete an issue
pub async fn delete_issue(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    services::issue::delete_issue(&state.db, id, user.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_issue_request_validation() {
        let req = CreateIssueRequest {
            title: String::new(),
            description: None,
            status: None,
            priority: None,
        };
        assert!(req.validate().is_err());

        let req: CreateIssueRequest =
            serde_json::from_str(r#"{"title": "Crash on login"}"#).unwrap();
        assert!(req.validate().is_ok());
        assert!(req.status.is_none());
        assert!(req.priority.is_none());
    }

    #[test]
    fn test_create_issue_request_accepts_canonical_strings() {
        let req: CreateIssueRequest = serde_json::from_str(
            r#"{"title": "Slow queries", "status": "In Progress", "priority": "High"}"#,
        )
        .unwrap();
        assert_eq!(req.status, Some(IssueStatus::InProgress));
        assert_eq!(req.priority, Some(IssuePriority::High));
    }

    #[test]
    fn test_update_request_absent_vs_null_description() {
        let req: UpdateIssueRequest = serde_json::from_str(r#"{"status": "Closed"}"#).unwrap();
        assert_eq!(req.status, Some(IssueStatus::Closed));
        assert_eq!(req.description, None);

        let req: UpdateIssueRequest = serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(req.description, Some(None));
    }
}
