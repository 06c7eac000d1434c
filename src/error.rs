use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use recipebox_ingredient::IngredientError;
use recipebox_recipe::RecipeError;
use recipebox_shopping::ShoppingListError;
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Suggestion error: {0}")]
    SuggestionError(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Internal server error")]
    InternalError(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<RecipeError> for AppError {
    fn from(err: RecipeError) -> Self {
        match err {
            RecipeError::ValidationError(e) => AppError::ValidationError(e),
            RecipeError::NotFound => AppError::NotFound("Recipe not found"),
            RecipeError::DatabaseError(e) => AppError::DatabaseError(e),
            RecipeError::SerializationError(e) => AppError::SerializationError(e),
        }
    }
}

impl From<ShoppingListError> for AppError {
    fn from(err: ShoppingListError) -> Self {
        match err {
            ShoppingListError::ValidationError(e) => AppError::ValidationError(e),
            ShoppingListError::NotFound => AppError::NotFound("Shopping list not found"),
            ShoppingListError::RecipeNotFound(_) => AppError::NotFound("Recipe not found"),
            ShoppingListError::DatabaseError(e) => AppError::DatabaseError(e),
            ShoppingListError::SerializationError(e) => AppError::SerializationError(e),
        }
    }
}

impl From<IngredientError> for AppError {
    fn from(err: IngredientError) -> Self {
        match err {
            IngredientError::ValidationError(e) => AppError::ValidationError(e),
            IngredientError::NotFound => AppError::NotFound("Ingredient not found"),
            IngredientError::DatabaseError(e) => AppError::DatabaseError(e),
            IngredientError::SerializationError(e) => AppError::SerializationError(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, body) = match self {
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, json!({ "message": message })),
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, json!({ "message": message })),
            AppError::ValidationError(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "message": "Validation failed", "errors": errors }),
            ),
            AppError::SuggestionError(e) => {
                tracing::error!(err = %e, "recipe suggestions failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Error getting recipe suggestions" }),
                )
            }
            AppError::DatabaseError(e) => {
                tracing::error!(err = ?e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "An unexpected error occurred. Please try again later." }),
                )
            }
            AppError::SerializationError(e) => {
                tracing::error!(err = %e, "serialization error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "An unexpected error occurred while processing data." }),
                )
            }
            AppError::InternalError(e) => {
                tracing::error!(err = %e, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "An unexpected error occurred. Please try again later." }),
                )
            }
        };

        (status_code, Json(body)).into_response()
    }
}
