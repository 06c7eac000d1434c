//! Turning selected recipes into shopping items.

use std::collections::HashMap;

use recipebox_shared::{Recipe, SelectedRecipe, ShoppingItem};

use crate::{ShoppingListError, ShoppingListResult};

/// Ingredients of `recipe` scaled from its own yield to `servings`.
///
/// A recipe without a yield (or a yield of 0) counts as one serving.
pub fn scale_recipe(recipe: &Recipe, servings: u32) -> impl Iterator<Item = ShoppingItem> + '_ {
    let base = recipe.servings.filter(|s| *s > 0).unwrap_or(1);
    let factor = f64::from(servings) / f64::from(base);

    recipe.ingredients.iter().map(move |ingredient| {
        ShoppingItem::new(
            ingredient.name.to_owned(),
            ingredient.quantity * factor,
            ingredient.unit.to_owned(),
        )
    })
}

/// Sums quantities of items sharing the exact same name and unit.
///
/// The first item of each group keeps its position and `bought` flag.
pub fn combine_items(items: impl IntoIterator<Item = ShoppingItem>) -> Vec<ShoppingItem> {
    let mut combined: Vec<ShoppingItem> = Vec::new();
    let mut positions: HashMap<(String, String), usize> = HashMap::new();

    for item in items {
        let key = (item.ingredient.name.to_owned(), item.ingredient.unit.to_owned());

        match positions.get(&key) {
            Some(&index) => combined[index].ingredient.quantity += item.ingredient.quantity,
            None => {
                positions.insert(key, combined.len());
                combined.push(item);
            }
        }
    }

    combined
}

/// Resolves the items stored for a new list.
///
/// Non-empty `items` are kept exactly as sent. Otherwise the selected recipes
/// are scaled and combined into the list. `recipes` must contain each selected
/// id either way; a missing one is an error.
pub fn merge_selection(
    items: Vec<ShoppingItem>,
    selection: &[SelectedRecipe],
    recipes: &[Recipe],
) -> ShoppingListResult<Vec<ShoppingItem>> {
    let mut scaled = Vec::new();

    for selected in selection {
        let recipe = recipes
            .iter()
            .find(|r| r.id == selected.id)
            .ok_or(ShoppingListError::RecipeNotFound(selected.id))?;

        if items.is_empty() {
            scaled.extend(scale_recipe(recipe, selected.servings));
        }
    }

    if !items.is_empty() {
        return Ok(items);
    }

    Ok(combine_items(scaled))
}
