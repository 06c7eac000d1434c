use std::collections::HashSet;

use recipebox_shared::{RecipeIngredient, ShoppingList};

/// Case folding applied to every ingredient name before comparison.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

/// Distinct normalized names currently on a shopping list.
pub fn list_names(list: &ShoppingList) -> HashSet<String> {
    list.items
        .iter()
        .map(|item| normalize_name(item.name()))
        .collect()
}

/// How much of a recipe is already covered by a shopping list.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlap {
    /// `|matching| / |distinct recipe names|`, 0 for a recipe without ingredients.
    pub similarity: f64,
    /// Normalized names shared with the list, in recipe order.
    pub matching: Vec<String>,
}

/// Scores a recipe's ingredients against the names on a list.
///
/// The ratio is taken over the recipe's distinct names, so unrelated list
/// items never dilute the score and duplicated recipe lines count once.
pub fn ingredient_overlap(current: &HashSet<String>, ingredients: &[RecipeIngredient]) -> Overlap {
    let mut seen = HashSet::with_capacity(ingredients.len());
    let mut matching = Vec::new();

    for ingredient in ingredients {
        let name = normalize_name(&ingredient.name);
        if seen.contains(&name) {
            continue;
        }

        if current.contains(&name) {
            matching.push(name.clone());
        }

        seen.insert(name);
    }

    let similarity = if seen.is_empty() {
        0.0
    } else {
        matching.len() as f64 / seen.len() as f64
    };

    Overlap {
        similarity,
        matching,
    }
}
