use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use recipebox_shared::{Ingredient, IngredientInput};

use crate::error::{AppError, AppResult};
use crate::routes::AppState;

pub async fn index(State(state): State<AppState>) -> AppResult<Json<Vec<Ingredient>>> {
    Ok(Json(state.ingredient_query.all().await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<IngredientInput>,
) -> AppResult<Json<Ingredient>> {
    Ok(Json(state.ingredient_command.create(input).await?))
}

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Ingredient>> {
    state
        .ingredient_query
        .find(id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("Ingredient not found"))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<IngredientInput>,
) -> AppResult<Json<Ingredient>> {
    Ok(Json(state.ingredient_command.update(id, input).await?))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<StatusCode> {
    state.ingredient_command.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
