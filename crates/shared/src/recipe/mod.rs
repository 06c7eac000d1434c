use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::Nutrition;

/// Ingredient line of a recipe or shopping list.
///
/// `quantity` and `unit` are display data; only `name` takes part in matching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct RecipeIngredient {
    #[validate(length(min = 1, message = "Ingredient name is required"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "Quantity must not be negative"))]
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
}

impl RecipeIngredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub prep_time: Option<u32>,
    #[serde(default)]
    pub cook_time: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
}

/// Create/update payload for a recipe.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInput {
    #[validate(length(min = 1, max = 200, message = "Recipe name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub prep_time: Option<u32>,
    #[serde(default)]
    pub cook_time: Option<u32>,
    #[validate(range(min = 1, message = "Servings must be at least 1"))]
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(nested)]
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
}

impl RecipeInput {
    pub fn into_recipe(self, id: i64) -> Recipe {
        Recipe {
            id,
            name: self.name,
            description: self.description,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
            image: self.image,
            tags: self.tags,
            ingredients: self.ingredients,
            instructions: self.instructions,
            nutrition: self.nutrition,
        }
    }
}
