pub mod error;
pub mod store;

pub use error::{DbError, Result};
pub use store::project_store::ProjectStore;
pub use store::sqlite_project_store::{SqliteProjectStore, StoreOptions};
