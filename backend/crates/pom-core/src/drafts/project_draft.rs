use crate::TaskDraft;

use serde::Deserialize;

/// Body of `POST /projects`.
///
/// Unknown keys are ignored and never reach the store.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    #[serde(default)]
    pub project_name: Option<String>,

    #[serde(default)]
    pub tasks: Option<Vec<TaskDraft>>,
}
