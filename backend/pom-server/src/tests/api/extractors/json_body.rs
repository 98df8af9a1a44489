use crate::{ApiError, JsonBody};

use pom_core::ProjectDraft;

use axum::{
    body::Body,
    extract::FromRequest,
    http::{Request, header},
};

fn json_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/projects")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_extracts_well_formed_body() {
    let request = json_request(r#"{"projectName":"Alpha","tasks":[]}"#);

    let JsonBody(draft) = JsonBody::<ProjectDraft>::from_request(request, &())
        .await
        .unwrap();

    assert_eq!(draft.project_name.as_deref(), Some("Alpha"));
    assert_eq!(draft.tasks.map(|t| t.len()), Some(0));
}

#[tokio::test]
async fn test_absent_keys_extract_as_none() {
    let request = json_request("{}");

    let JsonBody(draft) = JsonBody::<ProjectDraft>::from_request(request, &())
        .await
        .unwrap();

    assert!(draft.project_name.is_none());
    assert!(draft.tasks.is_none());
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let request = json_request(r#"{"projectName":"#);

    let result = JsonBody::<ProjectDraft>::from_request(request, &()).await;

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[tokio::test]
async fn test_wrong_field_type_is_bad_request() {
    let request = json_request(r#"{"projectName":"Alpha","tasks":"not a list"}"#);

    let result = JsonBody::<ProjectDraft>::from_request(request, &()).await;

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[tokio::test]
async fn test_missing_content_type_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/projects")
        .body(Body::from("{}"))
        .unwrap();

    let result = JsonBody::<ProjectDraft>::from_request(request, &()).await;

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}
