use std::path::Path;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    services::ServeFile,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::category::CategoryStore;
use service::todo::TodoStore;

pub mod categories;
pub mod todos;

/// Shared handler state: one independent store per resource kind.
/// Stores are cheap to clone (shared inner map).
#[derive(Clone)]
pub struct ServerState {
    pub todos: TodoStore,
    pub categories: CategoryStore,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, API docs, and both CRUD resources.
/// `docs_dir` holds the served OpenAPI documents; callers anchor it explicitly
/// instead of relying on the process working directory.
pub fn build_router(state: ServerState, cors: CorsLayer, docs_dir: &Path) -> Router {
    // Public routes (health + served OpenAPI documents)
    let public = Router::new()
        .route("/health", get(health))
        .route_service("/api-docs/todos", ServeFile::new(docs_dir.join("todos-api.yaml")))
        .route_service("/api-docs/categories", ServeFile::new(docs_dir.join("categories-api.yaml")));

    // Resource routes
    let api = Router::new()
        .route("/todos", get(todos::list).post(todos::create))
        .route(
            "/todos/:todo_id",
            get(todos::get).put(todos::update).delete(todos::delete),
        )
        .route("/categories", get(categories::list).post(categories::create))
        .route(
            "/categories/:category_id",
            get(categories::get).put(categories::update).delete(categories::delete),
        )
        .with_state(state);

    // Compose
    public
        .merge(api)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
