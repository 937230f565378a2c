//! Greedy one-to-one assignment of recipe ingredients to inventory items.
//!
//! Ingredient-major and first-come: each ingredient, in recipe order, takes
//! the best still-available item. Earlier ingredients are never revisited,
//! so this is not a maximum matching and is not meant to be one.

use serde::Serialize;
use std::collections::HashSet;

use super::normalize::normalize;
use super::similarity::{score_normalized, MatchType};
use crate::model::{InventoryItem, RecipeIngredient};

/// One inventory item paired with one recipe ingredient.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientMatch {
    pub inventory_item: InventoryItem,
    pub recipe_ingredient: RecipeIngredient,
    pub confidence: f64,
    pub match_type: MatchType,
}

/// Outcome of matching one recipe against an inventory snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub matched: Vec<IngredientMatch>,
    pub missing: Vec<RecipeIngredient>,
    /// Percentage of ingredients matched, 0-100. Zero for an empty recipe.
    pub match_score: u8,
    pub total_ingredients: usize,
    pub matched_count: usize,
    pub missing_count: usize,
}

impl MatchResult {
    pub fn is_complete(&self) -> bool {
        self.total_ingredients > 0 && self.missing_count == 0
    }
}

/// Rounded share of matched ingredients; an empty recipe scores 0.
pub fn match_score(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let percent = (matched as f64 / total as f64 * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

/// Match recipe ingredients against the inventory.
pub fn match_ingredients(inventory: &[InventoryItem], ingredients: &[RecipeIngredient]) -> MatchResult {
    // Normalize each inventory name once instead of once per ingredient
    let inventory_names: Vec<String> = inventory.iter().map(|item| normalize(&item.name)).collect();

    let mut matched: Vec<IngredientMatch> = Vec::new();
    let mut missing: Vec<RecipeIngredient> = Vec::new();
    let mut used_ids: HashSet<i64> = HashSet::new();

    for ingredient in ingredients {
        let ingredient_name = normalize(&ingredient.name);
        let mut best: Option<(usize, f64, MatchType)> = None;

        for (index, item) in inventory.iter().enumerate() {
            if used_ids.contains(&item.id) {
                continue;
            }
            let Some(similarity) = score_normalized(&inventory_names[index], &ingredient_name) else {
                continue;
            };
            // Strictly greater: the first item seen keeps a tie
            if best.map_or(true, |(_, confidence, _)| similarity.confidence > confidence) {
                best = Some((index, similarity.confidence, similarity.match_type));
            }
        }

        match best {
            Some((index, confidence, match_type)) => {
                let item = &inventory[index];
                let inserted = used_ids.insert(item.id);
                debug_assert!(inserted, "inventory item {} matched twice", item.id);
                matched.push(IngredientMatch {
                    inventory_item: item.clone(),
                    recipe_ingredient: ingredient.clone(),
                    confidence,
                    match_type,
                });
            }
            None => missing.push(ingredient.clone()),
        }
    }

    let total_ingredients = ingredients.len();
    let match_score = match_score(matched.len(), total_ingredients);

    MatchResult {
        matched_count: matched.len(),
        missing_count: missing.len(),
        matched,
        missing,
        match_score,
        total_ingredients,
    }
}
