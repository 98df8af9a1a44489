//! Project REST API handlers
//!
//! Validation always runs before the store is touched, so a rejected
//! payload never causes a write.

use crate::api::error::LIST_FAILED;
use crate::{
    ApiError, ApiResult, AppState, JsonBody, ProjectDto, ProjectListResponse, ProjectResponse,
};

use pom_core::{PayloadValidator, ProjectDraft, RenameDraft, TaskListDraft};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use log::{info, warn};

// =============================================================================
// Handlers
// =============================================================================

/// GET /projects
///
/// List all projects
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<ProjectListResponse>> {
    let projects = state
        .store
        .find_all()
        .await
        .map_err(|e| ApiError::store_internal(e, LIST_FAILED))?;

    Ok(Json(ProjectListResponse {
        projects: projects.into_iter().map(ProjectDto::from).collect(),
    }))
}

/// POST /projects
///
/// Create a project with its initial tasks
pub async fn create_project(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<ProjectDraft>,
) -> ApiResult<(StatusCode, Json<ProjectDto>)> {
    let new_project = PayloadValidator::validate_project_create(draft)?;

    let project = state.store.create(new_project).await?;

    info!(
        "Created project {} ({}) with {} tasks",
        project.id,
        project.project_name,
        project.task_count()
    );

    Ok((StatusCode::CREATED, Json(project.into())))
}

/// GET /projects/{project_id}
///
/// Get a single project by ID
pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> ApiResult<Json<ProjectResponse>> {
    let project = state
        .store
        .find_by_id(&project_id)
        .await
        .map_err(ApiError::store_not_found)?
        .ok_or_else(ApiError::project_not_found)?;

    Ok(Json(ProjectResponse {
        projects: project.into(),
    }))
}

/// POST /projects/{project_id}
///
/// Append tasks to the end of a project's task list
pub async fn append_tasks(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    JsonBody(draft): JsonBody<TaskListDraft>,
) -> ApiResult<(StatusCode, Json<ProjectDto>)> {
    let tasks = PayloadValidator::validate_task_append(draft)?;
    let appended = tasks.len();

    let project = state
        .store
        .push_tasks(&project_id, tasks)
        .await
        .map_err(ApiError::store_not_found)?
        .ok_or_else(ApiError::project_not_found)?;

    info!(
        "Appended {} tasks to project {} (now {})",
        appended,
        project.id,
        project.task_count()
    );

    Ok((StatusCode::CREATED, Json(project.into())))
}

/// PUT /projects/{project_id}
///
/// Rename a project. The body `_id` must repeat the path id.
pub async fn rename_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    JsonBody(draft): JsonBody<RenameDraft>,
) -> ApiResult<StatusCode> {
    let patch = PayloadValidator::validate_rename(&project_id, draft)?;

    match state.store.set_fields(&project_id, patch).await? {
        Some(project) => info!("Renamed project {} to {}", project.id, project.project_name),
        None => warn!("Rename matched no project with id {}", project_id),
    }

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /projects/{project_id}
///
/// Delete a project and all of its tasks
pub async fn delete_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> ApiResult<StatusCode> {
    let removed = state
        .store
        .delete_by_id(&project_id)
        .await
        .map_err(ApiError::store_not_found)?
        .ok_or_else(ApiError::project_not_found)?;

    info!(
        "Deleted project {} ({}, {} tasks)",
        removed.id,
        removed.project_name,
        removed.task_count()
    );

    Ok(StatusCode::NO_CONTENT)
}
