use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use service::category::{Category, CategoryInput};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize)]
pub struct ListCategoriesQuery {
    pub limit: Option<usize>,
}

/// GET /categories
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListCategoriesQuery>,
) -> Json<Vec<Category>> {
    let categories = state.categories.list(|_| true, q.limit).await;
    info!(count = categories.len(), "list categories");
    Json(categories)
}

/// POST /categories
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CategoryInput>,
) -> (StatusCode, Json<Category>) {
    let category = state.categories.create(input).await;
    info!(id = %category.id, name = %category.name, "created category");
    (StatusCode::CREATED, Json(category))
}

/// GET /categories/{categoryId}
pub async fn get(
    State(state): State<ServerState>,
    Path(category_id): Path<String>,
) -> Result<Json<Category>, JsonApiError> {
    let category = state.categories.get(&category_id).await?;
    Ok(Json(category))
}

/// PUT /categories/{categoryId} — full replacement of every resource field
pub async fn update(
    State(state): State<ServerState>,
    Path(category_id): Path<String>,
    Json(input): Json<CategoryInput>,
) -> Result<Json<Category>, JsonApiError> {
    let category = state.categories.update(&category_id, input).await?;
    info!(id = %category.id, "updated category");
    Ok(Json(category))
}

/// DELETE /categories/{categoryId}
pub async fn delete(
    State(state): State<ServerState>,
    Path(category_id): Path<String>,
) -> Result<StatusCode, JsonApiError> {
    state.categories.delete(&category_id).await?;
    info!(id = %category_id, "deleted category");
    Ok(StatusCode::NO_CONTENT)
}
