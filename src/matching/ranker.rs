//! Rank recipes by how much of them the current inventory covers.
//!
//! CHANGELOG:
//! - 10/11/2026 - Added category filter and threshold sanitising
//! - 10/10/2026 - Initial implementation

use serde::Serialize;

use super::matcher::{match_ingredients, IngredientMatch, MatchResult};
use crate::model::{InventoryItem, Recipe, RecipeIngredient};

/// Minimum match score (percent) a recipe needs to be suggested.
pub const DEFAULT_MIN_MATCH_SCORE: u8 = 75;

/// Maximum number of missing ingredients a suggested recipe may have.
pub const DEFAULT_MAX_MISSING: usize = 5;

/// Maximum number of recipes returned.
pub const DEFAULT_LIMIT: usize = 10;

/// Ranking thresholds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankOptions {
    pub min_match_score: u8,
    pub max_missing: usize,
    pub limit: usize,
    /// Only consider recipes of this category.
    pub category: Option<String>,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            min_match_score: DEFAULT_MIN_MATCH_SCORE,
            max_missing: DEFAULT_MAX_MISSING,
            limit: DEFAULT_LIMIT,
            category: None,
        }
    }
}

impl RankOptions {
    /// Clamp thresholds into their meaningful range.
    pub fn sanitized(mut self) -> Self {
        self.min_match_score = self.min_match_score.min(100);
        self.limit = self.limit.max(1);
        self
    }
}

/// A recipe that passed the thresholds, with its match breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSuggestion {
    pub recipe: Recipe,
    pub matched: Vec<IngredientMatch>,
    pub missing: Vec<RecipeIngredient>,
    pub match_score: u8,
    pub can_make_with_inventory: bool,
}

impl RecipeSuggestion {
    fn new(recipe: Recipe, result: MatchResult) -> Self {
        Self {
            recipe,
            can_make_with_inventory: result.match_score == 100,
            matched: result.matched,
            missing: result.missing,
            match_score: result.match_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRanking {
    pub recipes: Vec<RecipeSuggestion>,
    pub inventory_used: usize,
    pub total_inventory: usize,
    pub filter: RankOptions,
}

/// Keep whole units only; split portions stay out of recipe matching.
pub fn original_units(inventory: &[InventoryItem]) -> Vec<InventoryItem> {
    inventory.iter().filter(|item| item.is_original).cloned().collect()
}

/// Whether a match result passes the score and missing-count thresholds.
pub fn passes(result: &MatchResult, options: &RankOptions) -> bool {
    result.match_score >= options.min_match_score && result.missing_count <= options.max_missing
}

/// Filter already-scored results and sort them by descending score.
///
/// The sort is stable, so equal scores keep their input order.
pub fn rank_results<T>(scored: Vec<(T, MatchResult)>, options: &RankOptions) -> Vec<(T, MatchResult)> {
    let mut kept: Vec<(T, MatchResult)> = scored
        .into_iter()
        .filter(|(_, result)| passes(result, options))
        .collect();
    kept.sort_by(|a, b| b.1.match_score.cmp(&a.1.match_score));
    kept.truncate(options.limit);
    kept
}

/// Match every recipe against the inventory and return the best candidates.
pub fn rank_recipes(recipes: &[Recipe], inventory: &[InventoryItem], options: &RankOptions) -> RecipeRanking {
    let options = options.clone().sanitized();
    let units = original_units(inventory);

    let scored: Vec<(Recipe, MatchResult)> = recipes
        .iter()
        .filter(|recipe| match &options.category {
            Some(category) => recipe.category.as_deref() == Some(category.as_str()),
            None => true,
        })
        .map(|recipe| {
            let result = match_ingredients(&units, &recipe.ingredients);
            tracing::debug!(
                recipe = %recipe.name,
                score = result.match_score,
                missing = result.missing_count,
                "Scored recipe"
            );
            (recipe.clone(), result)
        })
        .collect();

    let recipes = rank_results(scored, &options)
        .into_iter()
        .map(|(recipe, result)| RecipeSuggestion::new(recipe, result))
        .collect();

    RecipeRanking {
        recipes,
        inventory_used: units.len(),
        total_inventory: units.len(),
        filter: options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn item(id: i64, name: &str) -> InventoryItem {
        InventoryItem {
            id,
            barcode: format!("bc-{id}"),
            name: name.to_string(),
            category: Category::Pantry,
            quantity: 1,
            usage_level: 100,
            parent_id: None,
            is_original: true,
        }
    }

    fn recipe(id: i64, name: &str, category: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            id,
            name: name.to_string(),
            category: Some(category.to_string()),
            area: None,
            ingredients: ingredients
                .iter()
                .map(|n| RecipeIngredient::new(*n, ""))
                .collect(),
        }
    }

    fn result_with_score(match_score: u8, missing_count: usize) -> MatchResult {
        MatchResult {
            matched: Vec::new(),
            missing: Vec::new(),
            match_score,
            total_ingredients: missing_count,
            matched_count: 0,
            missing_count,
        }
    }

    #[test]
    fn test_rank_results_filters_and_sorts() {
        let scored = vec![
            ("a", result_with_score(90, 1)),
            ("b", result_with_score(60, 2)),
            ("c", result_with_score(100, 0)),
        ];
        let ranked = rank_results(scored, &RankOptions::default());
        let order: Vec<u8> = ranked.iter().map(|(_, r)| r.match_score).collect();
        assert_eq!(order, vec![100, 90]);
    }

    #[test]
    fn test_rank_results_is_stable_on_ties() {
        let scored = vec![
            ("first", result_with_score(80, 1)),
            ("second", result_with_score(95, 0)),
            ("third", result_with_score(80, 1)),
        ];
        let ranked = rank_results(scored, &RankOptions::default());
        let names: Vec<&str> = ranked.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["second", "first", "third"]);
    }

    #[test]
    fn test_rank_results_max_missing_and_limit() {
        let scored = vec![
            ("a", result_with_score(80, 6)),
            ("b", result_with_score(80, 5)),
            ("c", result_with_score(85, 0)),
        ];
        let options = RankOptions {
            limit: 1,
            ..RankOptions::default()
        };
        let ranked = rank_results(scored.clone(), &options);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].0, "c");

        let ranked = rank_results(scored, &RankOptions::default());
        let names: Vec<&str> = ranked.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["c", "b"]);
    }

    #[test]
    fn test_rank_recipes_end_to_end() {
        let inventory = vec![
            item(1, "Spaghetti"),
            item(2, "Tomatoes"),
            item(3, "Garlic"),
            item(4, "Eggs"),
        ];
        let recipes = vec![
            recipe(10, "Pasta Pomodoro", "Pasta", &["spaghetti", "tomato", "garlic", "basil"]),
            recipe(11, "Boiled Eggs", "Breakfast", &["eggs"]),
            recipe(12, "Beef Stew", "Beef", &["beef", "carrots", "potatoes"]),
        ];

        let ranking = rank_recipes(&recipes, &inventory, &RankOptions::default());

        let names: Vec<&str> = ranking.recipes.iter().map(|r| r.recipe.name.as_str()).collect();
        assert_eq!(names, vec!["Boiled Eggs", "Pasta Pomodoro"]);
        assert!(ranking.recipes[0].can_make_with_inventory);
        assert!(!ranking.recipes[1].can_make_with_inventory);
        assert_eq!(ranking.recipes[1].match_score, 75);
        assert_eq!(ranking.recipes[1].missing[0].name, "basil");
        assert_eq!(ranking.total_inventory, 4);
    }

    #[test]
    fn test_rank_recipes_skips_portions() {
        let mut portion = item(2, "Eggs");
        portion.is_original = false;
        portion.parent_id = Some(1);
        let inventory = vec![portion];
        let recipes = vec![recipe(10, "Boiled Eggs", "Breakfast", &["eggs"])];

        let ranking = rank_recipes(&recipes, &inventory, &RankOptions::default());

        assert!(ranking.recipes.is_empty());
        assert_eq!(ranking.inventory_used, 0);
    }

    #[test]
    fn test_rank_recipes_category_filter() {
        let inventory = vec![item(1, "Eggs")];
        let recipes = vec![
            recipe(10, "Boiled Eggs", "Breakfast", &["eggs"]),
            recipe(11, "Egg Fried Rice", "Side", &["eggs"]),
        ];
        let options = RankOptions {
            category: Some("Side".to_string()),
            ..RankOptions::default()
        };

        let ranking = rank_recipes(&recipes, &inventory, &options);

        assert_eq!(ranking.recipes.len(), 1);
        assert_eq!(ranking.recipes[0].recipe.id, 11);
    }

    #[test]
    fn test_options_sanitized() {
        let options = RankOptions {
            min_match_score: 250,
            limit: 0,
            ..RankOptions::default()
        }
        .sanitized();
        assert_eq!(options.min_match_score, 100);
        assert_eq!(options.limit, 1);
    }
}
