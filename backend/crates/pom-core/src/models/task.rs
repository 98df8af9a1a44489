//! Task entity - unit of work embedded in a project.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A task always lives inside its owning [`Project`](crate::Project); it has
/// no id and no lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub task_name: String,
    /// Target total. Kept as a JSON number so integers round-trip as integers.
    pub total: Number,
    /// Progress entries. Opaque to this service.
    pub log: Value,
}

impl Task {
    pub fn new(task_name: impl Into<String>, total: impl Into<Number>, log: Value) -> Self {
        Self {
            task_name: task_name.into(),
            total: total.into(),
            log,
        }
    }
}
