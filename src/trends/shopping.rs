//! Shopping list auto-suggestions built on top of [`super::suggest`].
//!
//! Candidate selection and ordering live here; the caller decides how to
//! evaluate each candidate (the CLI does it in parallel).

use serde::Serialize;
use std::collections::HashSet;

use super::suggest::SuggestionDecision;
use crate::model::{Category, InventoryItem, Priority, ShoppingListEntry};

/// A repurchase recommendation for one inventory identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingSuggestion {
    pub barcode: String,
    pub name: String,
    pub category: Category,
    pub priority: Priority,
    pub reason: String,
    pub current_quantity: u32,
    pub usage_level: u8,
}

impl ShoppingSuggestion {
    /// `None` unless the decision says to buy.
    pub fn from_decision(item: &InventoryItem, decision: SuggestionDecision) -> Option<Self> {
        if !decision.should {
            return None;
        }
        Some(Self {
            barcode: item.barcode.clone(),
            name: item.name.clone(),
            category: item.category,
            priority: decision.priority,
            reason: decision.reason,
            current_quantity: item.quantity,
            usage_level: item.usage_level,
        })
    }
}

/// Inventory items worth evaluating for a suggestion.
///
/// Original units only, one per `(barcode, category)`, skipping identities
/// already waiting on the list as unpurchased entries.
pub fn suggestion_candidates<'a>(
    inventory: &'a [InventoryItem],
    shopping_list: &[ShoppingListEntry],
) -> Vec<&'a InventoryItem> {
    let listed: HashSet<(&str, Category)> = shopping_list
        .iter()
        .filter(|entry| !entry.is_purchased)
        .filter_map(|entry| entry.barcode.as_deref().map(|b| (b, entry.category)))
        .collect();

    let mut seen: HashSet<(&str, Category)> = HashSet::new();
    inventory
        .iter()
        .filter(|item| item.is_original)
        .filter(|item| !listed.contains(&item.identity()))
        .filter(|item| seen.insert(item.identity()))
        .collect()
}

/// Order suggestions high priority first, keeping input order within a priority.
pub fn sort_suggestions(suggestions: &mut [ShoppingSuggestion]) {
    suggestions.sort_by_key(|s| s.priority);
}
