mod command;
mod error;
mod query;

pub use command::Command;
pub use error::{RecipeError, RecipeResult};
pub use query::{Query, RecipeRow};
