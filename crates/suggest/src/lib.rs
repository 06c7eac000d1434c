//! Recipe suggestion engine.
//!
//! Ranks a recipe catalog against the items of a shopping list. Scoring blends
//! how much of each recipe is already on the list with a nutritional-balance
//! heuristic. Everything here is a pure function of its inputs.

pub mod balance;
pub mod overlap;
pub mod rank;

pub use balance::{MacroTargets, nutritional_balance};
pub use overlap::{Overlap, ingredient_overlap, list_names, normalize_name};
pub use rank::{DEFAULT_TOP_K, SuggestOptions, Suggestion, suggest};
