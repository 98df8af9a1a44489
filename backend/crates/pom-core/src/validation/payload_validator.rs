//! Presence checks for inbound project and task payloads.
//!
//! Each check turns a draft into a validated domain value, or reports the
//! first missing field. Field order is fixed: `projectName` before `tasks`,
//! and within a task `taskName`, `total`, `log`. Tasks are walked in
//! submission order, so the first incomplete task decides the error.

use crate::{
    CoreError, NewProject, ProjectDraft, ProjectPatch, RenameDraft, Result as CoreErrorResult,
    Task, TaskDraft, TaskListDraft,
};

use std::panic::Location;

use error_location::ErrorLocation;

pub const FIELD_PROJECT_NAME: &str = "projectName";
pub const FIELD_TASKS: &str = "tasks";
pub const FIELD_TASK_NAME: &str = "taskName";
pub const FIELD_TOTAL: &str = "total";
pub const FIELD_LOG: &str = "log";

/// Validates client payloads before any store call
pub struct PayloadValidator;

impl PayloadValidator {
    /// Validate a create-project body: `projectName`, then `tasks`, then every task.
    #[track_caller]
    pub fn validate_project_create(draft: ProjectDraft) -> CoreErrorResult<NewProject> {
        let project_name = Self::require(draft.project_name, FIELD_PROJECT_NAME)?;
        let tasks = Self::require(draft.tasks, FIELD_TASKS)?;
        let tasks = Self::validate_task_list(tasks)?;

        Ok(NewProject::new(project_name, tasks))
    }

    /// Validate an append-tasks body. The `tasks` key itself must be present.
    #[track_caller]
    pub fn validate_task_append(draft: TaskListDraft) -> CoreErrorResult<Vec<Task>> {
        let tasks = Self::require(draft.tasks, FIELD_TASKS)?;
        Self::validate_task_list(tasks)
    }

    /// Validate every task in order. Nothing is accepted unless all tasks pass.
    #[track_caller]
    pub fn validate_task_list(tasks: Vec<TaskDraft>) -> CoreErrorResult<Vec<Task>> {
        tasks.into_iter().map(Self::validate_task).collect()
    }

    #[track_caller]
    fn validate_task(draft: TaskDraft) -> CoreErrorResult<Task> {
        let task_name = Self::require(draft.task_name, FIELD_TASK_NAME)?;
        let total = Self::require(draft.total, FIELD_TOTAL)?;
        let log = Self::require(draft.log, FIELD_LOG)?;

        Ok(Task {
            task_name,
            total,
            log,
        })
    }

    /// Validate a rename body against the path id.
    ///
    /// The id check runs first and short-circuits: a mismatched request never
    /// reaches the name check, let alone the store.
    #[track_caller]
    pub fn validate_rename(path_id: &str, draft: RenameDraft) -> CoreErrorResult<ProjectPatch> {
        let body_id = draft.id.unwrap_or_default();
        if path_id.is_empty() || body_id.is_empty() || path_id != body_id {
            return Err(CoreError::IdMismatch {
                path_id: path_id.to_string(),
                body_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        match draft.project_name {
            Some(name) if !name.is_empty() => Ok(ProjectPatch::rename(name)),
            _ => Err(CoreError::Validation {
                message: format!("Must specify value for {}", FIELD_PROJECT_NAME),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    #[track_caller]
    fn require<T>(value: Option<T>, field: &'static str) -> CoreErrorResult<T> {
        value.ok_or_else(|| CoreError::MissingField {
            field,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
