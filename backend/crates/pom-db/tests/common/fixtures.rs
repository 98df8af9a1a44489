use pom_core::{NewProject, Task};

use serde_json::json;

const PARENTS: [&str; 3] = ["Node Capstone", "Goals", "Chores"];

/// Creates a Task with a small log
pub fn create_test_task(name: &str, total: i64) -> Task {
    Task::new(name, total, json!([{ "minutes": 25 }]))
}

/// Creates an unsaved project with `task_count` tasks
pub fn create_test_project(index: usize, task_count: usize) -> NewProject {
    let tasks = (0..task_count)
        .map(|i| create_test_task(&format!("task-{}", i), i as i64 + 1))
        .collect();

    NewProject::new(PARENTS[index % PARENTS.len()], tasks)
}
