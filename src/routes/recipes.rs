use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use recipebox_shared::{Recipe, RecipeInput};

use crate::error::{AppError, AppResult};
use crate::routes::AppState;

/// GET /api/recipes
pub async fn index(State(state): State<AppState>) -> AppResult<Json<Vec<Recipe>>> {
    Ok(Json(state.recipe_query.all().await?))
}

/// POST /api/recipes
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<RecipeInput>,
) -> AppResult<Json<Recipe>> {
    Ok(Json(state.recipe_command.create(input).await?))
}

/// GET /api/recipes/{id}
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Recipe>> {
    state
        .recipe_query
        .find(id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("Recipe not found"))
}

/// PUT /api/recipes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<RecipeInput>,
) -> AppResult<Json<Recipe>> {
    Ok(Json(state.recipe_command.update(id, input).await?))
}

/// DELETE /api/recipes/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<StatusCode> {
    state.recipe_command.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
