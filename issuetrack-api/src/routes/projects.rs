/// Project endpoints
///
/// All endpoints require authentication; the middleware injects [`AuthUser`]
/// before any handler runs. Every operation on `/projects/:id` enforces
/// ownership, with the missing-resource check taking precedence so probing
/// foreign IDs looks the same as probing random ones.
///
/// # Endpoints
///
/// - `GET /projects` - List own projects with issue counts
/// - `POST /projects` - Create a project
/// - `GET /projects/:id` - Fetch a project
/// - `PATCH /projects/:id` - Partial update
/// - `DELETE /projects/:id` - Delete (cascades to issues)

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    services,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use issuetrack_shared::{
    auth::middleware::AuthUser,
    models::project::{Project, ProjectWithIssueCount, UpdateProject},
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Create project request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectRequest {
    /// Project name
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    /// Optional description
    pub description: Option<String>,
}

/// Partial update request
///
/// Absent fields are left untouched; `"description": null` clears it.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    /// New project name
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,

    /// New description; explicit `null` clears it
    #[serde(default, deserialize_with = "issuetrack_shared::models::double_option")]
    pub description: Option<Option<String>>,
}

/// List the caller's projects with issue counts
pub async fn list_projects(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<Vec<ProjectWithIssueCount>>> {
    let projects = services::project::list_projects(&state.db, user.id).await?;
    Ok(Json(projects))
}

/// Create a project owned by the caller
pub async fn create_project(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    req.validate().map_err(ApiError::from)?;

    let project =
        services::project::create_project(&state.db, user.id, req.name, req.description).await?;

    Ok((StatusCode::CREATED, Json(project)))
}

/// Fetch a single project
pub async fn get_project(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Project>> {
    let project = services::project::get_project(&state.db, id, user.id).await?;
    Ok(Json(project))
}

/// Apply a partial update to a project
pub async fn update_project(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProjectRequest>,
) -> ApiResult<Json<Project>> {
    req.validate().map_err(ApiError::from)?;

    let data = UpdateProject {
        name: req.name,
        description: req.description,
    };

    let project = services::project::update_project(&state.db, id, user.id, data).await?;
    Ok(Json(project))
}

/// Delete a project, cascading to its issues
pub async fn delete_project(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    services::project::delete_project(&state.db, id, user.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_project_request_validation() {
        let req = CreateProjectRequest {
            name: String::new(),
            description: None,
        };
        assert!(req.validate().is_err());

        let req = CreateProjectRequest {
            name: "Backend".to_string(),
            description: Some("API rewrite".to_string()),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_update_request_absent_vs_null_description() {
        let req: UpdateProjectRequest = serde_json::from_str(r#"{"name": "Renamed"}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some("Renamed"));
        assert_eq!(req.description, None);

        let req: UpdateProjectRequest = serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(req.description, Some(None));
    }
}
