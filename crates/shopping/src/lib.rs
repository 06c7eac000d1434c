mod command;
mod error;
pub mod merge;
mod query;

pub use command::Command;
pub use error::{ShoppingListError, ShoppingListResult};
pub use merge::{combine_items, merge_selection, scale_recipe};
pub use query::{Query, ShoppingListRow};
