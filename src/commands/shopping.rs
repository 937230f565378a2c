//! Shopping command: auto-suggestions for the whole inventory.
//!
//! CHANGELOG:
//! - 10/16/2026 - Evaluate candidates in parallel with rayon
//! - 10/16/2026 - Initial implementation

use anyhow::Result;
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

use crate::db::{helpers, open_db};
use crate::model::{InventoryItem, ItemEvent};
use crate::output::OutputControls;
use crate::trends::analyzer::window_start;
use crate::trends::{
    should_suggest_purchase, sort_suggestions, suggestion_candidates, ShoppingSuggestion,
    SuggestOptions,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ShoppingReport {
    suggestions: Vec<ShoppingSuggestion>,
    candidates: usize,
}

/// Evaluate every candidate, fetching its event slice with `events_for`.
///
/// Candidates are independent, so they run on the rayon pool. Each item's
/// own usage level feeds the decision; the remaining thresholds come from
/// `options`.
pub fn evaluate_candidates<F>(
    candidates: &[&InventoryItem],
    options: &SuggestOptions,
    now: DateTime<Utc>,
    events_for: F,
) -> Result<Vec<ShoppingSuggestion>>
where
    F: Fn(&InventoryItem) -> Result<Vec<ItemEvent>> + Sync,
{
    let evaluated: Vec<Option<ShoppingSuggestion>> = candidates
        .par_iter()
        .map(|&item| {
            let events = events_for(item)?;
            let item_options = SuggestOptions {
                usage_level: item.usage_level,
                ..options.clone()
            };
            let decision = should_suggest_purchase(
                &events,
                &item.barcode,
                item.category,
                item.quantity,
                &item_options,
                now,
            );
            Ok(ShoppingSuggestion::from_decision(item, decision))
        })
        .collect::<Result<_>>()?;

    let mut suggestions: Vec<ShoppingSuggestion> = evaluated.into_iter().flatten().collect();
    sort_suggestions(&mut suggestions);
    Ok(suggestions)
}

/// Print repurchase suggestions for items not already on the list.
pub fn run(db_path: &Path, options: SuggestOptions, out: &OutputControls) -> Result<()> {
    let now = Utc::now();
    let conn = open_db(db_path)?;
    let inventory = helpers::load_inventory(&conn)?;
    let open_list = helpers::load_open_shopping_list(&conn)?;
    let candidates = suggestion_candidates(&inventory, &open_list);
    info!(
        inventory = inventory.len(),
        listed = open_list.len(),
        candidates = candidates.len(),
        "Evaluating shopping candidates"
    );

    let since = window_start(now, options.lookback_days.max(1));
    // rusqlite connections are not Sync; each task opens its own
    let suggestions = evaluate_candidates(&candidates, &options, now, |item| {
        let conn = open_db(db_path)?;
        helpers::load_events(&conn, &item.barcode, item.category, since)
    })?;

    if suggestions.is_empty() {
        warn!(candidates = candidates.len(), "No shopping suggestions");
    }

    if out.json {
        out.print(&ShoppingReport {
            candidates: candidates.len(),
            suggestions,
        });
        return Ok(());
    }

    if suggestions.is_empty() {
        println!("Nothing to add to the shopping list.");
        return Ok(());
    }

    println!("Shopping Suggestions:");
    println!("{:-<40}", "");
    for s in &suggestions {
        println!(
            "[{:<6}] {} ({}, {} left): {}",
            s.priority, s.name, s.category, s.current_quantity, s.reason
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, EventType, Priority};
    use crate::trends::analyzer::tests::{event, now};

    fn item(id: i64, barcode: &str, quantity: u32, usage_level: u8) -> InventoryItem {
        InventoryItem {
            id,
            barcode: barcode.to_string(),
            name: format!("Item {barcode}"),
            category: Category::Pantry,
            quantity,
            usage_level,
            parent_id: None,
            is_original: true,
        }
    }

    #[test]
    fn test_evaluate_candidates_sorted_by_priority() {
        let inventory = vec![
            // last unit nearly empty: medium
            item(1, "111", 1, 10),
            // 1 per day with 3 left: high
            item(2, "222", 3, 10),
            // plenty left
            item(3, "333", 20, 90),
        ];
        let log = vec![
            event("222", EventType::Deleted, Some(-30), 2),
            event("333", EventType::Deleted, Some(-3), 2),
        ];
        let candidates: Vec<&InventoryItem> = inventory.iter().collect();

        let suggestions = evaluate_candidates(&candidates, &SuggestOptions::default(), now(), |item| {
            Ok(log.iter().filter(|e| e.barcode == item.barcode).cloned().collect())
        })
        .unwrap();

        let barcodes: Vec<&str> = suggestions.iter().map(|s| s.barcode.as_str()).collect();
        assert_eq!(barcodes, vec!["222", "111"]);
        assert_eq!(suggestions[0].priority, Priority::High);
        assert_eq!(suggestions[1].priority, Priority::Medium);
        assert_eq!(suggestions[1].usage_level, 10);
    }

    #[test]
    fn test_evaluate_candidates_propagates_load_errors() {
        let inventory = vec![item(1, "111", 5, 100)];
        let candidates: Vec<&InventoryItem> = inventory.iter().collect();

        let result = evaluate_candidates(&candidates, &SuggestOptions::default(), now(), |_| {
            Err(anyhow::anyhow!("database locked"))
        });

        assert!(result.is_err());
    }
}
