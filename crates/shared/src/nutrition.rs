use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Vitamin keys tracked by the recipe form.
pub const VITAMINS: [&str; 10] = ["a", "c", "d", "e", "k", "b1", "b2", "b3", "b6", "b12"];

/// Mineral keys tracked by the recipe form.
pub const MINERALS: [&str; 5] = ["calcium", "iron", "magnesium", "potassium", "zinc"];

/// Number of micronutrient slots a fully documented profile fills.
pub const TRACKED_MICRONUTRIENTS: usize = VITAMINS.len() + MINERALS.len();

/// Nutrition profile attached to a recipe or a catalog ingredient.
///
/// Every field is optional on the wire. Vitamins and minerals are open maps so
/// profiles written by older or newer clients still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nutrition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbohydrates: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub vitamins: BTreeMap<String, f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub minerals: BTreeMap<String, f64>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, f64>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Nutrition {
    /// Count of vitamin and mineral entries present in the profile.
    pub fn micronutrient_count(&self) -> usize {
        self.vitamins.len() + self.minerals.len()
    }
}
