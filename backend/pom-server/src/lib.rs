pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod shutdown;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::json_body::JsonBody,
    projects::{
        project_dto::{ProjectDto, TaskDto},
        project_list_response::ProjectListResponse,
        project_response::ProjectResponse,
        projects::{
            append_tasks, create_project, delete_project, get_project, list_projects,
            rename_project,
        },
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
