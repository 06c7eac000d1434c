use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use recipebox_shared::{SelectedRecipe, ShoppingList, ShoppingListInput};

use crate::error::{AppError, AppResult};
use crate::routes::AppState;

/// GET /api/shopping-lists
pub async fn index(State(state): State<AppState>) -> AppResult<Json<Vec<ShoppingList>>> {
    Ok(Json(state.shopping_query.all().await?))
}

/// POST /api/shopping-lists
///
/// Selected recipes are loaded here and handed to the command, which scales
/// and merges their ingredients into the new list.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ShoppingListInput>,
) -> AppResult<Json<ShoppingList>> {
    let ids: Vec<i64> = input.recipes.iter().map(|r| r.id).collect();
    let recipes = state.recipe_query.find_many(&ids).await?;

    Ok(Json(state.shopping_command.create(input, &recipes).await?))
}

/// GET /api/shopping-lists/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ShoppingList>> {
    state
        .shopping_query
        .find(id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound("Shopping list not found"))
}

/// PUT /api/shopping-lists/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<ShoppingListInput>,
) -> AppResult<Json<ShoppingList>> {
    Ok(Json(state.shopping_command.update(id, input).await?))
}

/// DELETE /api/shopping-lists/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<StatusCode> {
    state.shopping_command.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/shopping-lists/{id}/recipes
pub async fn recipes(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<SelectedRecipe>>> {
    if state.shopping_query.find(id).await?.is_none() {
        return Err(AppError::NotFound("Shopping list not found"));
    }

    Ok(Json(state.shopping_query.recipes(id).await?))
}
