mod command;
mod error;
mod query;

pub use command::Command;
pub use error::{IngredientError, IngredientResult};
pub use query::{IngredientRow, Query};
