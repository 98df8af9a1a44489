use crate::{
    AppState, append_tasks, create_project, delete_project, get_project, health, list_projects,
    rename_project,
};

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Project resource
        .nest("/projects", project_routes())
        // Add shared state
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route(
            "/{project_id}",
            get(get_project)
                .post(append_tasks)
                .put(rename_project)
                .delete(delete_project),
        )
}
