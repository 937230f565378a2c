//! Trend commands: trend, suggest.
//!
//! CHANGELOG:
//! - 10/16/2026 - Added suggest command
//! - 10/15/2026 - Initial trend command

use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::Connection;
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::db::{helpers, open_db};
use crate::model::{Category, ItemEvent};
use crate::output::{format_error, OutputControls};
use crate::trends::analyzer::window_start;
use crate::trends::{
    analyze_consumption, should_suggest_purchase, ConsumptionTrend, SuggestOptions,
    SuggestionDecision, TrendQuery,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SuggestReport<'a> {
    barcode: &'a str,
    category: Category,
    current_quantity: u32,
    #[serde(flatten)]
    decision: SuggestionDecision,
}

/// Event slice covering the last `lookback_days` (at least one).
fn recent_events(
    conn: &Connection,
    barcode: &str,
    category: Category,
    lookback_days: u32,
    now: DateTime<Utc>,
) -> Result<Vec<ItemEvent>> {
    let since = window_start(now, lookback_days.max(1));
    let events = helpers::load_events(conn, barcode, category, since)?;
    info!(barcode, %category, events = events.len(), "Loaded event history");
    Ok(events)
}

/// Consumption trend for one identity, `None` without history.
pub fn analyze_trend(
    conn: &Connection,
    query: &TrendQuery<'_>,
    now: DateTime<Utc>,
) -> Result<Option<ConsumptionTrend>> {
    let events = recent_events(conn, query.barcode, query.category, query.lookback_days, now)?;
    Ok(analyze_consumption(&events, query, now))
}

/// Repurchase decision for one identity.
pub fn decide_purchase(
    conn: &Connection,
    barcode: &str,
    category: Category,
    current_quantity: u32,
    options: &SuggestOptions,
    now: DateTime<Utc>,
) -> Result<SuggestionDecision> {
    let events = recent_events(conn, barcode, category, options.lookback_days, now)?;
    Ok(should_suggest_purchase(
        &events,
        barcode,
        category,
        current_quantity,
        options,
        now,
    ))
}

/// Print the consumption trend of `barcode` in `category`.
pub fn trend(db_path: &Path, query: TrendQuery<'_>, out: &OutputControls) -> Result<()> {
    let conn = open_db(db_path)?;
    let Some(trend) = analyze_trend(&conn, &query, Utc::now())? else {
        if out.json {
            println!("{}", format_error("No consumption history for this item"));
        } else {
            println!(
                "No consumption history for {} ({}) in the last {} days.",
                query.barcode, query.category, query.lookback_days
            );
        }
        return Ok(());
    };

    if out.json {
        out.print(&trend);
        return Ok(());
    }

    println!("Consumption Trend: {} ({})", trend.name, trend.barcode);
    println!("{:-<40}", "");
    println!("consumption_rate: {:.2} per day", trend.consumption_rate);
    println!("total_consumed: {}", trend.total_consumed);
    println!("purchase_frequency: {:.1} days", trend.purchase_frequency);
    if let Some(last) = trend.last_purchase {
        println!("last_purchase: {}", last.to_rfc3339());
    }
    if let Some(run_out) = trend.predicted_run_out {
        println!("predicted_run_out: {}", run_out.to_rfc3339());
    }
    println!("confidence: {:?}", trend.confidence);
    println!("event_count: {}", trend.event_count);

    Ok(())
}

/// Print whether `barcode` in `category` should be bought again.
pub fn suggest(
    db_path: &Path,
    barcode: &str,
    category: Category,
    current_quantity: u32,
    options: SuggestOptions,
    out: &OutputControls,
) -> Result<()> {
    let conn = open_db(db_path)?;
    let decision = decide_purchase(&conn, barcode, category, current_quantity, &options, Utc::now())?;

    if out.json {
        out.print(&SuggestReport {
            barcode,
            category,
            current_quantity,
            decision,
        });
    } else if decision.should {
        println!("Buy {} ({}): {} [{}]", barcode, category, decision.reason, decision.priority);
    } else {
        println!("Skip {} ({}): {}", barcode, category, decision.reason);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::helpers::tests::test_db;
    use crate::model::Priority;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 1, 12, 0, 0).unwrap()
    }

    fn seed(conn: &Connection) {
        let day = 86_400;
        let ts = |days_ago: i64| now().timestamp() - days_ago * day;
        conn.execute(
            "INSERT INTO item_events (barcode, name, category, event_type, quantity_change, timestamp)
             VALUES ('111', 'Milk', 'fridge', 'added', 2, ?1),
                    ('111', 'Milk', 'fridge', 'quantity_decrement', -1, ?2),
                    ('111', 'Milk', 'fridge', 'added', 2, ?3),
                    ('111', 'Milk', 'fridge', 'deleted', -14, ?4),
                    ('111', 'Milk', 'fridge', 'added', 1, ?5),
                    ('111', 'Milk', 'pantry', 'deleted', -50, ?4)",
            [ts(20), ts(15), ts(10), ts(2), ts(45)],
        )
        .unwrap();
    }

    #[test]
    fn test_analyze_trend_from_store() {
        let conn = test_db();
        seed(&conn);
        let query = TrendQuery {
            current_quantity: 3,
            ..TrendQuery::new("111", Category::Fridge)
        };

        let trend = analyze_trend(&conn, &query, now()).unwrap().unwrap();

        // 15 consumed over 30 days; the 45-day-old purchase is outside the window
        assert_eq!(trend.total_consumed, 15);
        assert!((trend.consumption_rate - 0.5).abs() < 1e-9);
        assert!((trend.purchase_frequency - 10.0).abs() < 1e-9);
        assert_eq!(trend.event_count, 4);
        assert_eq!(trend.predicted_run_out, Some(now() + chrono::Duration::days(6)));
    }

    #[test]
    fn test_analyze_trend_without_history() {
        let conn = test_db();
        seed(&conn);
        let query = TrendQuery::new("999", Category::Fridge);
        assert!(analyze_trend(&conn, &query, now()).unwrap().is_none());
    }

    #[test]
    fn test_decide_purchase_from_store() {
        let conn = test_db();
        seed(&conn);
        let options = SuggestOptions {
            usage_level: 10,
            ..SuggestOptions::default()
        };

        // 0.5 per day with 2 left: 4 days
        let decision = decide_purchase(&conn, "111", Category::Fridge, 2, &options, now()).unwrap();
        assert!(decision.should);
        assert_eq!(decision.priority, Priority::Medium);
        assert_eq!(decision.reason, "low usage level, expected to run out in 4 days");

        let decision = decide_purchase(&conn, "999", Category::Fridge, 2, &options, now()).unwrap();
        assert!(!decision.should);
        assert_eq!(decision.reason, "no consumption history");
    }
}
