use crate::TaskDraft;

use serde::Deserialize;

/// Body of `POST /projects/{id}`. Only `tasks` is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskListDraft {
    #[serde(default)]
    pub tasks: Option<Vec<TaskDraft>>,
}
