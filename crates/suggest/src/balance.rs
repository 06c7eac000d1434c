use recipebox_shared::{Nutrition, nutrition::TRACKED_MICRONUTRIENTS};
use serde::{Deserialize, Serialize};

const MACRO_WEIGHT: f64 = 0.7;
const MICRO_WEIGHT: f64 = 0.3;

/// Reference macro-nutrient shares, in percent.
///
/// `fiber` (grams per day) is carried for callers that supply their own
/// target set; the default macro score does not read it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacroTargets {
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub fiber: f64,
}

impl Default for MacroTargets {
    fn default() -> Self {
        Self {
            protein: 20.0,
            carbohydrates: 50.0,
            fat: 30.0,
            fiber: 25.0,
        }
    }
}

/// Nutritional balance heuristic.
///
/// Formula:
/// balance = (sum of macro components) * 0.7 + (micronutrient entries / 15) * 0.3
///
/// Each macro component is `1 - |actual% - target%| / 100` where
/// `actual% = grams / calories * 100`. Components are not clamped, so a badly
/// unbalanced recipe can go negative and the sum can exceed 1. A profile that
/// is missing, or has no calories, scores 0. A missing macro contributes 0.
pub fn nutritional_balance(nutrition: Option<&Nutrition>, targets: &MacroTargets) -> f64 {
    let Some(nutrition) = nutrition else {
        return 0.0;
    };

    let calories = match nutrition.calories {
        Some(calories) if calories != 0.0 => calories,
        _ => return 0.0,
    };

    let macro_score: f64 = [
        (nutrition.protein, targets.protein),
        (nutrition.carbohydrates, targets.carbohydrates),
        (nutrition.fat, targets.fat),
    ]
    .into_iter()
    .map(|(grams, target)| grams.map_or(0.0, |grams| macro_component(grams, calories, target)))
    .sum();

    let micro_score = nutrition.micronutrient_count() as f64 / TRACKED_MICRONUTRIENTS as f64;

    let score = macro_score * MACRO_WEIGHT + micro_score * MICRO_WEIGHT;

    if score.is_finite() { score } else { 0.0 }
}

fn macro_component(grams: f64, calories: f64, target: f64) -> f64 {
    let actual = grams / calories * 100.0;

    1.0 - (actual - target).abs() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn profile(calories: f64, protein: f64, carbohydrates: f64, fat: f64) -> Nutrition {
        Nutrition {
            calories: Some(calories),
            protein: Some(protein),
            carbohydrates: Some(carbohydrates),
            fat: Some(fat),
            ..Default::default()
        }
    }

    fn approx(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    #[test]
    fn test_missing_profile_scores_zero() {
        assert_eq!(nutritional_balance(None, &MacroTargets::default()), 0.0);
    }

    #[test]
    fn test_zero_calories_scores_zero() {
        let nutrition = profile(0.0, 30.0, 60.0, 20.0);

        let score = nutritional_balance(Some(&nutrition), &MacroTargets::default());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_missing_calories_scores_zero() {
        let nutrition = Nutrition {
            protein: Some(10.0),
            ..Default::default()
        };

        assert_eq!(nutritional_balance(Some(&nutrition), &MacroTargets::default()), 0.0);
    }

    #[test]
    fn test_on_target_macros() {
        // 20/50/30 of 100 calories hits every target exactly.
        let nutrition = profile(100.0, 20.0, 50.0, 30.0);

        let score = nutritional_balance(Some(&nutrition), &MacroTargets::default());
        assert!(approx(score, 3.0 * 0.7));
    }

    #[test]
    fn test_micronutrients_add_coverage() {
        let mut nutrition = profile(100.0, 20.0, 50.0, 30.0);
        nutrition.vitamins = BTreeMap::from([("a".to_owned(), 1.0), ("c".to_owned(), 2.0)]);
        nutrition.minerals = BTreeMap::from([("iron".to_owned(), 1.0)]);

        let score = nutritional_balance(Some(&nutrition), &MacroTargets::default());
        assert!(approx(score, 3.0 * 0.7 + (3.0 / 15.0) * 0.3));
    }

    #[test]
    fn test_unbalanced_macros_go_negative() {
        // Protein at 500% of calories lands far from the 20% target.
        let nutrition = profile(100.0, 500.0, 0.0, 0.0);

        let score = nutritional_balance(Some(&nutrition), &MacroTargets::default());
        let expected = ((1.0 - 480.0 / 100.0) + (1.0 - 50.0 / 100.0) + (1.0 - 30.0 / 100.0)) * 0.7;
        assert!(approx(score, expected));
        assert!(score < 0.0);
    }

    #[test]
    fn test_missing_macro_contributes_nothing() {
        let nutrition = Nutrition {
            calories: Some(100.0),
            protein: Some(20.0),
            ..Default::default()
        };

        let score = nutritional_balance(Some(&nutrition), &MacroTargets::default());
        assert!(approx(score, 0.7));
    }

    #[test]
    fn test_custom_targets() {
        let nutrition = profile(100.0, 40.0, 30.0, 30.0);
        let targets = MacroTargets {
            protein: 40.0,
            carbohydrates: 30.0,
            ..Default::default()
        };

        let score = nutritional_balance(Some(&nutrition), &targets);
        assert!(approx(score, 3.0 * 0.7));
    }

    #[test]
    fn test_non_finite_input_scores_zero() {
        let nutrition = profile(100.0, f64::NAN, 50.0, 30.0);

        assert_eq!(nutritional_balance(Some(&nutrition), &MacroTargets::default()), 0.0);
    }
}
