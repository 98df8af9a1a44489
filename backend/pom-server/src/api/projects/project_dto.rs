use pom_core::{Project, Task};

use serde::Serialize;
use serde_json::{Number, Value};

/// Project DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: String,
    pub project_name: String,
    pub tasks: Vec<TaskDto>,
}

/// Task DTO, always nested in a [`ProjectDto`]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub task_name: String,
    pub total: Number,
    pub log: Value,
}

impl From<Task> for TaskDto {
    fn from(t: Task) -> Self {
        Self {
            task_name: t.task_name,
            total: t.total,
            log: t.log,
        }
    }
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            project_name: p.project_name,
            tasks: p.tasks.into_iter().map(TaskDto::from).collect(),
        }
    }
}
