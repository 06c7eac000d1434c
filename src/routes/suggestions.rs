use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use recipebox_suggest::{Suggestion, suggest};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::routes::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SuggestionParams {
    pub limit: Option<usize>,
}

/// GET /api/shopping-lists/{id}/suggestions
///
/// Any failure other than a missing list is reported as a single
/// "Error getting recipe suggestions"; partial results are never returned.
#[tracing::instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    params: Result<Query<SuggestionParams>, QueryRejection>,
) -> AppResult<Json<Vec<Suggestion>>> {
    let Query(params) = params?;

    let list = state
        .shopping_query
        .find(id)
        .await
        .map_err(|e| AppError::SuggestionError(e.to_string()))?
        .ok_or(AppError::NotFound("Shopping list not found"))?;

    let catalog = state
        .recipe_query
        .all()
        .await
        .map_err(|e| AppError::SuggestionError(e.to_string()))?;

    let mut options = state.config.suggestions.options();
    if let Some(limit) = params.limit {
        options = options.with_top_k(limit);
    }

    let suggestions = tokio::task::spawn_blocking(move || suggest(&list, &catalog, &options))
        .await
        .map_err(|e| AppError::SuggestionError(e.to_string()))?;

    tracing::info!(list = id, returned = suggestions.len(), "recipe suggestions served");

    Ok(Json(suggestions))
}
