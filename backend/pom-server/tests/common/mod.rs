#![allow(dead_code)]

//! Test infrastructure for pom-server API tests

use pom_core::{NewProject, Project, ProjectPatch, Task};
use pom_db::{DbError, ProjectStore, Result as DbErrorResult, SqliteProjectStore};
use pom_server::{AppState, build_router};

use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, Bytes},
    http::{Request, StatusCode, header},
};
use error_location::ErrorLocation;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Create AppState backed by a fresh in-memory store
pub async fn create_test_app_state() -> AppState {
    let store = SqliteProjectStore::connect_in_memory()
        .await
        .expect("Failed to create test store");

    AppState::new(Arc::new(store))
}

/// Create AppState whose store fails every call
pub fn create_failing_app_state() -> AppState {
    AppState::new(Arc::new(FailingStore))
}

pub fn create_test_app(state: &AppState) -> Router {
    build_router(state.clone())
}

/// Store double that reports an error for every operation
pub struct FailingStore;

impl FailingStore {
    #[track_caller]
    fn fail<T>() -> DbErrorResult<T> {
        Err(DbError::Initialization {
            message: "store unavailable".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

#[async_trait]
impl ProjectStore for FailingStore {
    async fn find_all(&self) -> DbErrorResult<Vec<Project>> {
        Self::fail()
    }

    async fn find_by_id(&self, _id: &str) -> DbErrorResult<Option<Project>> {
        Self::fail()
    }

    async fn create(&self, _project: NewProject) -> DbErrorResult<Project> {
        Self::fail()
    }

    async fn push_tasks(&self, _id: &str, _tasks: Vec<Task>) -> DbErrorResult<Option<Project>> {
        Self::fail()
    }

    async fn set_fields(&self, _id: &str, _patch: ProjectPatch) -> DbErrorResult<Option<Project>> {
        Self::fail()
    }

    async fn delete_by_id(&self, _id: &str) -> DbErrorResult<Option<Project>> {
        Self::fail()
    }

    async fn ping(&self) -> DbErrorResult<()> {
        Self::fail()
    }

    async fn close(&self) {}
}

/// Task JSON with every required field
pub fn task_json(name: &str, total: i64) -> Value {
    json!({
        "taskName": name,
        "total": total,
        "log": [{ "at": "2026-01-01T00:00:00Z", "minutes": total }],
    })
}

/// Project JSON with `task_count` complete tasks
pub fn project_json(name: &str, task_count: usize) -> Value {
    let tasks: Vec<Value> = (0..task_count)
        .map(|i| task_json(&format!("Task {}", i), i as i64))
        .collect();

    json!({ "projectName": name, "tasks": tasks })
}

/// Send a request and collect the response body
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Bytes) {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, body)
}

pub fn body_json(body: &Bytes) -> Value {
    serde_json::from_slice(body).unwrap()
}

pub fn body_text(body: &Bytes) -> String {
    String::from_utf8(body.to_vec()).unwrap()
}

/// Create a project through the API and return its id
pub async fn create_project_via_api(app: &Router, name: &str, task_count: usize) -> String {
    let (status, body) = send(app, "POST", "/projects", Some(project_json(name, task_count))).await;
    assert_eq!(status, StatusCode::CREATED);

    body_json(&body)["id"].as_str().unwrap().to_string()
}
