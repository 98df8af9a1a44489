pub mod drafts;
pub mod error;
pub mod models;
pub mod validation;


pub use drafts::project_draft::ProjectDraft;
pub use drafts::rename_draft::RenameDraft;
pub use drafts::task_draft::TaskDraft;
pub use drafts::task_list_draft::TaskListDraft;
pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::project::{NewProject, Project, ProjectPatch};
pub use models::task::Task;
pub use validation::payload_validator::PayloadValidator;
