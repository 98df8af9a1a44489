//! Project entity - a named, ordered collection of tasks.

use crate::Task;

use serde::{Deserialize, Serialize};

/// A persisted project document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Store-assigned, never mutated
    pub id: String,
    pub project_name: String,
    /// Append-only from the API's point of view
    pub tasks: Vec<Task>,
}

impl Project {
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

/// A validated project that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub project_name: String,
    pub tasks: Vec<Task>,
}

impl NewProject {
    pub fn new(project_name: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self {
            project_name: project_name.into(),
            tasks,
        }
    }

    /// Attach the store-assigned id.
    pub fn into_project(self, id: String) -> Project {
        Project {
            id,
            project_name: self.project_name,
            tasks: self.tasks,
        }
    }
}

/// Field-level update applied atomically by the store.
///
/// Only `projectName` is settable; tasks change through push only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub project_name: Option<String>,
}

impl ProjectPatch {
    pub fn rename(project_name: impl Into<String>) -> Self {
        Self {
            project_name: Some(project_name.into()),
        }
    }
}
