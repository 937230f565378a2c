//! Ingredient matching: which recipes can be cooked from current stock.

pub mod matcher;
pub mod normalize;
pub mod ranker;
pub mod similarity;

pub use matcher::{match_ingredients, IngredientMatch, MatchResult};
pub use normalize::normalize;
pub use ranker::{rank_recipes, RankOptions, RecipeRanking, RecipeSuggestion};
pub use similarity::{score, MatchType, Similarity};
