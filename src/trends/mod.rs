//! Consumption trends and repurchase suggestions from the item event log.

pub mod analyzer;
pub mod shopping;
pub mod suggest;

pub use analyzer::{analyze_consumption, ConsumptionTrend, TrendConfidence, TrendQuery};
pub use shopping::{sort_suggestions, suggestion_candidates, ShoppingSuggestion};
pub use suggest::{should_suggest_purchase, SuggestOptions, SuggestionDecision};
