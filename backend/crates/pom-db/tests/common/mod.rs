#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::{create_test_project, create_test_task};
pub use test_db::create_test_store;
