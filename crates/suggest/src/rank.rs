use std::collections::HashSet;

use recipebox_shared::{Recipe, ShoppingList};
use serde::Serialize;

use crate::balance::{MacroTargets, nutritional_balance};
use crate::overlap::{ingredient_overlap, list_names};

pub const DEFAULT_TOP_K: usize = 5;

const INGREDIENT_WEIGHT: f64 = 0.6;
const NUTRITION_WEIGHT: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuggestOptions {
    /// Maximum number of suggestions returned.
    pub top_k: usize,
    pub targets: MacroTargets,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            targets: MacroTargets::default(),
        }
    }
}

impl SuggestOptions {
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}

/// A ranked recipe with the evidence behind its rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub recipe: Recipe,
    /// Combined score: `overlap * 0.6 + balance * 0.4`.
    pub similarity: f64,
    pub matching_ingredients: Vec<String>,
    pub nutritional_balance: f64,
}

struct Scored<'a> {
    recipe: &'a Recipe,
    similarity: f64,
    matching: Vec<String>,
    balance: f64,
}

impl Scored<'_> {
    fn into_suggestion(self) -> Suggestion {
        Suggestion {
            recipe: self.recipe.clone(),
            similarity: self.similarity,
            matching_ingredients: self.matching,
            nutritional_balance: self.balance,
        }
    }
}

/// Ranks `catalog` against the items of `list`.
///
/// Recipes sharing no ingredient with the list, and recipes whose combined
/// score is not positive, are dropped before the top `options.top_k` are
/// kept. Ordering is by descending score; ties keep catalog order.
pub fn suggest(list: &ShoppingList, catalog: &[Recipe], options: &SuggestOptions) -> Vec<Suggestion> {
    let current = list_names(list);

    let mut scored: Vec<Scored<'_>> = catalog
        .iter()
        .filter_map(|recipe| score(recipe, &current, &options.targets))
        .collect();

    let relevant = scored.len();

    // `sort_by` is stable, equal scores keep catalog order.
    scored.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    scored.truncate(options.top_k);

    tracing::debug!(
        list = list.id,
        catalog = catalog.len(),
        relevant = relevant,
        returned = scored.len(),
        "ranked recipe suggestions"
    );

    scored.into_iter().map(Scored::into_suggestion).collect()
}

fn score<'a>(
    recipe: &'a Recipe,
    current: &HashSet<String>,
    targets: &MacroTargets,
) -> Option<Scored<'a>> {
    let overlap = ingredient_overlap(current, &recipe.ingredients);
    if overlap.matching.is_empty() {
        return None;
    }

    let balance = nutritional_balance(recipe.nutrition.as_ref(), targets);
    let similarity = overlap.similarity * INGREDIENT_WEIGHT + balance * NUTRITION_WEIGHT;

    if similarity <= 0.0 {
        return None;
    }

    Some(Scored {
        recipe,
        similarity,
        matching: overlap.matching,
        balance,
    })
}
