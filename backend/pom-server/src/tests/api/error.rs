use crate::ApiError;

use pom_core::{CoreError, PayloadValidator, RenameDraft, TaskListDraft};
use pom_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::{StatusCode, header};
use http_body_util::BodyExt;

async fn body_text(response: axum::response::Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_message() {
    let response = ApiError::project_not_found().into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json, serde_json::json!({ "message": "Project Not Found" }));
}

#[tokio::test]
async fn test_missing_field_returns_400_plain_text() {
    let error = ApiError::MissingField {
        message: "Missing `tasks` in request body".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/plain"));

    assert_eq!(body_text(response).await, "Missing `tasks` in request body");
}

#[tokio::test]
async fn test_bad_request_returns_400_with_json_message() {
    let error = ApiError::BadRequest {
        message: "Must specify value for projectName".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["message"], "Must specify value for projectName");
}

#[tokio::test]
async fn test_store_error_hides_details_from_client() {
    let db_error = DbError::Initialization {
        message: "disk on fire".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = ApiError::from(db_error).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let text = body_text(response).await;
    assert!(!text.contains("disk on fire"));
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["message"], "Internal server error");
}

#[test]
fn test_store_not_found_maps_any_store_error_to_404() {
    let db_error = DbError::Initialization {
        message: "pool closed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let error = ApiError::store_not_found(db_error);

    assert_eq!(error.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_missing_field_core_error_maps_to_missing_field() {
    let core_error = PayloadValidator::validate_task_append(TaskListDraft::default()).unwrap_err();

    let error = ApiError::from(core_error);

    match error {
        ApiError::MissingField { message, .. } => {
            assert_eq!(message, "Missing `tasks` in request body")
        }
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn test_id_mismatch_core_error_maps_to_bad_request() {
    let draft = RenameDraft {
        id: Some("b".into()),
        project_name: Some("New".into()),
    };
    let core_error = PayloadValidator::validate_rename("a", draft).unwrap_err();
    assert!(matches!(core_error, CoreError::IdMismatch { .. }));

    let error = ApiError::from(core_error);

    match error {
        ApiError::BadRequest { message, .. } => assert_eq!(
            message,
            "Request path id (a) and request body id (b) must match"
        ),
        other => panic!("expected BadRequest, got {other:?}"),
    }
}
