use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::RecipeIngredient;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ShoppingItem {
    #[validate(nested)]
    #[serde(flatten)]
    pub ingredient: RecipeIngredient,
    #[serde(default)]
    pub bought: bool,
}

impl ShoppingItem {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            ingredient: RecipeIngredient::new(name, quantity, unit),
            bought: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.ingredient.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub items: Vec<ShoppingItem>,
}

/// Recipe picked when building a list, with the servings wanted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct SelectedRecipe {
    pub id: i64,
    #[validate(range(min = 1, message = "Servings must be at least 1"))]
    pub servings: u32,
}

/// Create/update payload for a shopping list.
///
/// `recipes` is only honoured on creation, where it is recorded as recipe
/// links. Non-empty `items` are stored as sent; an empty list is filled from
/// the scaled ingredients of the selected recipes.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ShoppingListInput {
    #[validate(length(min = 1, max = 200, message = "Shopping list name is required"))]
    pub name: String,
    #[validate(nested)]
    #[serde(default)]
    pub items: Vec<ShoppingItem>,
    #[validate(nested)]
    #[serde(default)]
    pub recipes: Vec<SelectedRecipe>,
}
