//! Repurchase suggestions.
//!
//! Rules are evaluated in a fixed order and the first one that fires decides:
//!
//! 1. last unit nearly used up (no history needed)
//! 2. no history in the window: never suggest
//! 3. low usage level and projected run-out within the threshold
//! 4. regularly bought item whose stock fell well below a typical purchase
//! 5. otherwise: sufficient stock

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::analyzer::{
    analyze_consumption, TrendConfidence, TrendQuery, DEFAULT_LOOKBACK_DAYS, MILLIS_PER_DAY,
};
use crate::model::{Category, ItemEvent, Priority};

/// Usage level (percent) below which an open unit counts as nearly empty.
pub const LOW_USAGE_LEVEL: u8 = 25;

/// Usage level assumed when the caller does not know it.
pub const DEFAULT_USAGE_LEVEL: u8 = 100;

/// Suggest when the projected run-out is at most this many days away.
pub const DEFAULT_DAYS_TO_RUN_OUT: u32 = 7;

/// Projected run-outs at most this many days away are high priority.
pub const HIGH_PRIORITY_DAYS: f64 = 3.0;

/// Share of a typical purchase below which a regular item is running low.
pub const REGULAR_PURCHASE_RATIO: f64 = 0.3;

pub const REASON_LAST_ITEM: &str = "last item, low usage level";
pub const REASON_NO_HISTORY: &str = "no consumption history";
pub const REASON_REGULAR_PURCHASE: &str = "regularly purchased item running low";
pub const REASON_SUFFICIENT_STOCK: &str = "sufficient stock";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestOptions {
    /// Fullness of the open unit, 0-100.
    pub usage_level: u8,
    pub days_to_run_out: u32,
    pub lookback_days: u32,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            usage_level: DEFAULT_USAGE_LEVEL,
            days_to_run_out: DEFAULT_DAYS_TO_RUN_OUT,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionDecision {
    pub should: bool,
    pub reason: String,
    pub priority: Priority,
}

impl SuggestionDecision {
    fn suggest(reason: impl Into<String>, priority: Priority) -> Self {
        Self {
            should: true,
            reason: reason.into(),
            priority,
        }
    }

    fn skip(reason: &str) -> Self {
        Self {
            should: false,
            reason: reason.to_string(),
            priority: Priority::Low,
        }
    }
}

/// Decide whether `(barcode, category)` should go on the shopping list.
pub fn should_suggest_purchase(
    events: &[ItemEvent],
    barcode: &str,
    category: Category,
    current_quantity: u32,
    options: &SuggestOptions,
    now: DateTime<Utc>,
) -> SuggestionDecision {
    let low_usage = options.usage_level < LOW_USAGE_LEVEL;

    if current_quantity == 1 && low_usage {
        return SuggestionDecision::suggest(REASON_LAST_ITEM, Priority::Medium);
    }

    let query = TrendQuery {
        barcode,
        category,
        lookback_days: options.lookback_days,
        current_quantity,
    };
    let Some(trend) = analyze_consumption(events, &query, now) else {
        return SuggestionDecision::skip(REASON_NO_HISTORY);
    };

    if let Some(run_out) = trend.predicted_run_out.filter(|_| low_usage) {
        let days_left = (run_out - now).num_milliseconds() as f64 / MILLIS_PER_DAY;
        if days_left > 0.0 && days_left <= f64::from(options.days_to_run_out) {
            let priority = if days_left <= HIGH_PRIORITY_DAYS {
                Priority::High
            } else {
                Priority::Medium
            };
            return SuggestionDecision::suggest(
                format!(
                    "low usage level, expected to run out in {} days",
                    days_left.ceil()
                ),
                priority,
            );
        }
    }

    if trend.purchase_frequency > 0.0 && trend.confidence == TrendConfidence::High {
        let per_purchase = trend.total_consumed as f64 / trend.purchase_frequency.max(1.0);
        if f64::from(current_quantity) < per_purchase * REGULAR_PURCHASE_RATIO {
            return SuggestionDecision::suggest(REASON_REGULAR_PURCHASE, Priority::Medium);
        }
    }

    SuggestionDecision::skip(REASON_SUFFICIENT_STOCK)
}
