use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::Nutrition;

/// Catalog entry describing an ingredient and its nutrition per serving.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub serving_size: Option<f64>,
    #[serde(default)]
    pub serving_unit: Option<String>,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IngredientInput {
    #[validate(length(min = 1, max = 200, message = "Ingredient name is required"))]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "Serving size must be positive"))]
    #[serde(default)]
    pub serving_size: Option<f64>,
    #[serde(default)]
    pub serving_unit: Option<String>,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
}

impl IngredientInput {
    pub fn into_ingredient(self, id: i64) -> Ingredient {
        Ingredient {
            id,
            name: self.name,
            category: self.category,
            serving_size: self.serving_size,
            serving_unit: self.serving_unit,
            nutrition: self.nutrition,
        }
    }
}
