use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use service::todo::{Todo, TodoInput};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize)]
pub struct ListTodosQuery {
    pub completed: Option<bool>,
    pub limit: Option<usize>,
}

/// GET /todos
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListTodosQuery>,
) -> Json<Vec<Todo>> {
    let todos = state.todos.list(|t| t.matches_completed(q.completed), q.limit).await;
    info!(count = todos.len(), completed = ?q.completed, "list todos");
    Json(todos)
}

/// POST /todos
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<TodoInput>,
) -> (StatusCode, Json<Todo>) {
    let todo = state.todos.create(input).await;
    info!(id = %todo.id, title = %todo.title, "created todo");
    (StatusCode::CREATED, Json(todo))
}

/// GET /todos/{todoId}
pub async fn get(
    State(state): State<ServerState>,
    Path(todo_id): Path<String>,
) -> Result<Json<Todo>, JsonApiError> {
    let todo = state.todos.get(&todo_id).await?;
    Ok(Json(todo))
}

/// PUT /todos/{todoId} — full replacement of every resource field
pub async fn update(
    State(state): State<ServerState>,
    Path(todo_id): Path<String>,
    Json(input): Json<TodoInput>,
) -> Result<Json<Todo>, JsonApiError> {
    let todo = state.todos.update(&todo_id, input).await?;
    info!(id = %todo.id, "updated todo");
    Ok(Json(todo))
}

/// DELETE /todos/{todoId}
pub async fn delete(
    State(state): State<ServerState>,
    Path(todo_id): Path<String>,
) -> Result<StatusCode, JsonApiError> {
    state.todos.delete(&todo_id).await?;
    info!(id = %todo_id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}
