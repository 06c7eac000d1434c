pub mod ingredient;
pub mod nutrition;
pub mod recipe;
pub mod shopping;

pub use ingredient::{Ingredient, IngredientInput};
pub use nutrition::Nutrition;
pub use recipe::{Recipe, RecipeIngredient, RecipeInput};
pub use shopping::{SelectedRecipe, ShoppingItem, ShoppingList, ShoppingListInput};
