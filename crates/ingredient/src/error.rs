use thiserror::Error;

pub type IngredientResult<T> = Result<T, IngredientError>;

#[derive(Error, Debug)]
pub enum IngredientError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Ingredient not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
