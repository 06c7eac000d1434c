use thiserror::Error;

pub type ShoppingListResult<T> = Result<T, ShoppingListError>;

#[derive(Error, Debug)]
pub enum ShoppingListError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Shopping list not found")]
    NotFound,

    #[error("Recipe {0} not found")]
    RecipeNotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
