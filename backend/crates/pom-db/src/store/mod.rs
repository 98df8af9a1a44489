pub mod project_store;
pub mod sqlite_project_store;
