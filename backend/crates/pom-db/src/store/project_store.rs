//! The document-store seam the HTTP layer talks to.
//!
//! Every method is a single round-trip and is atomic for the one document it
//! touches. Nothing here spans documents, and nothing retries.

use crate::Result as DbErrorResult;

use pom_core::{NewProject, Project, ProjectPatch, Task};

use async_trait::async_trait;

#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// All projects, oldest first.
    async fn find_all(&self) -> DbErrorResult<Vec<Project>>;

    /// `None` when no document has this id. Malformed ids are not an error.
    async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<Project>>;

    /// Insert a new document; the store assigns the id.
    async fn create(&self, project: NewProject) -> DbErrorResult<Project>;

    /// Append `tasks` to the end of the document's task array, in order.
    /// Returns the updated document, or `None` if the id is unknown.
    async fn push_tasks(&self, id: &str, tasks: Vec<Task>) -> DbErrorResult<Option<Project>>;

    /// Set the patched fields. Returns the updated document, or `None` if the
    /// id is unknown.
    async fn set_fields(&self, id: &str, patch: ProjectPatch) -> DbErrorResult<Option<Project>>;

    /// Remove the document. Returns what was removed, or `None` if the id is
    /// unknown.
    async fn delete_by_id(&self, id: &str) -> DbErrorResult<Option<Project>>;

    /// Cheap liveness probe.
    async fn ping(&self) -> DbErrorResult<()>;

    /// Release the underlying connections. Called once, after serving stops.
    async fn close(&self);
}
