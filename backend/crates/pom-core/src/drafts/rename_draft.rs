use serde::Deserialize;

/// Body of `PUT /projects/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameDraft {
    /// Must echo the path id
    #[serde(default, rename = "_id")]
    pub id: Option<String>,

    #[serde(default)]
    pub project_name: Option<String>,
}
