use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// A task as submitted by a client, before presence checks.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    #[serde(default)]
    pub task_name: Option<String>,

    #[serde(default)]
    pub total: Option<Number>,

    /// Opaque: a present `null` is `Some(Value::Null)`, only an absent key is `None`.
    #[serde(default, deserialize_with = "present_value")]
    pub log: Option<Value>,
}

/// Only runs when the key is present, so any value (including `null`) counts.
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
