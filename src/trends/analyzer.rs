//! Consumption trend analysis over the item event log.
//!
//! Every call recomputes from the supplied events; nothing is cached.
//!
//! CHANGELOG:
//! - 10/13/2026 - Consumed quantity is now the absolute value of each delta
//! - 10/11/2026 - Initial implementation

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::model::{Category, EventType, ItemEvent};

/// Default analysis window in days.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 30;

/// Units consumed in the window for a `high` confidence trend.
pub const HIGH_CONFIDENCE_CONSUMED: u64 = 10;

/// Units consumed in the window for a `medium` confidence trend.
pub const MEDIUM_CONFIDENCE_CONSUMED: u64 = 3;

pub(crate) const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// How much history backs a trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendConfidence {
    High,
    Medium,
    Low,
}

impl TrendConfidence {
    pub fn from_consumed(total_consumed: u64) -> Self {
        if total_consumed >= HIGH_CONFIDENCE_CONSUMED {
            TrendConfidence::High
        } else if total_consumed >= MEDIUM_CONFIDENCE_CONSUMED {
            TrendConfidence::Medium
        } else {
            TrendConfidence::Low
        }
    }
}

/// Point-in-time consumption estimate for one product identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionTrend {
    pub barcode: String,
    pub name: String,
    /// Units per day over the window.
    pub consumption_rate: f64,
    /// Mean days between purchases, 0 with fewer than two purchases.
    pub purchase_frequency: f64,
    pub total_consumed: u64,
    pub last_purchase: Option<DateTime<Utc>>,
    pub predicted_run_out: Option<DateTime<Utc>>,
    pub confidence: TrendConfidence,
    pub event_count: usize,
}

/// Identity and window to analyze.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendQuery<'a> {
    pub barcode: &'a str,
    pub category: Category,
    pub lookback_days: u32,
    pub current_quantity: u32,
}

impl<'a> TrendQuery<'a> {
    pub fn new(barcode: &'a str, category: Category) -> Self {
        Self {
            barcode,
            category,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            current_quantity: 0,
        }
    }

    /// A zero-day window would divide by zero; treat it as one day.
    fn effective_lookback(&self) -> u32 {
        self.lookback_days.max(1)
    }
}

/// Start of the analysis window.
pub fn window_start(now: DateTime<Utc>, lookback_days: u32) -> DateTime<Utc> {
    now.checked_sub_signed(Duration::days(i64::from(lookback_days)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Events for the identity inside the window, newest first.
///
/// Equal timestamps keep their input order.
pub fn window_events<'e>(
    events: &'e [ItemEvent],
    barcode: &str,
    category: Category,
    since: DateTime<Utc>,
) -> Vec<&'e ItemEvent> {
    let mut selected: Vec<&ItemEvent> = events
        .iter()
        .filter(|e| e.barcode == barcode && e.category == category && e.timestamp >= since)
        .collect();
    selected.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    selected
}

/// Units consumed by an event, whatever sign the writer used.
pub fn consumed_amount(event: &ItemEvent) -> u64 {
    if event.event_type.is_consumption() {
        event.quantity_change.unwrap_or(0).unsigned_abs()
    } else {
        0
    }
}

fn days_between(later: DateTime<Utc>, earlier: DateTime<Utc>) -> f64 {
    (later - earlier).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Mean gap in days between consecutive purchases (newest-first input).
fn purchase_frequency(purchases: &[&ItemEvent]) -> f64 {
    if purchases.len() < 2 {
        return 0.0;
    }
    let total: f64 = purchases
        .windows(2)
        .map(|pair| days_between(pair[0].timestamp, pair[1].timestamp))
        .sum();
    total / (purchases.len() - 1) as f64
}

/// `now + current_quantity / rate` days, `None` if not projectable.
fn predict_run_out(now: DateTime<Utc>, current_quantity: u32, rate: f64) -> Option<DateTime<Utc>> {
    if rate <= 0.0 || current_quantity == 0 {
        return None;
    }
    let millis = f64::from(current_quantity) / rate * MILLIS_PER_DAY;
    if !millis.is_finite() || millis >= i64::MAX as f64 {
        return None;
    }
    let delta = Duration::try_milliseconds(millis as i64)?;
    now.checked_add_signed(delta)
}

/// Analyze consumption of one `(barcode, category)` identity.
///
/// Returns `None` when the window holds no events for it.
pub fn analyze_consumption(
    events: &[ItemEvent],
    query: &TrendQuery<'_>,
    now: DateTime<Utc>,
) -> Option<ConsumptionTrend> {
    let lookback_days = query.effective_lookback();
    let selected = window_events(
        events,
        query.barcode,
        query.category,
        window_start(now, lookback_days),
    );
    let latest = selected.first()?;

    let purchases: Vec<&ItemEvent> = selected
        .iter()
        .copied()
        .filter(|e| e.event_type == EventType::Added)
        .collect();

    let total_consumed: u64 = selected.iter().map(|e| consumed_amount(e)).sum();
    let consumption_rate = total_consumed as f64 / f64::from(lookback_days);

    let trend = ConsumptionTrend {
        barcode: query.barcode.to_string(),
        name: latest.name.clone(),
        consumption_rate,
        purchase_frequency: purchase_frequency(&purchases),
        total_consumed,
        last_purchase: purchases.first().map(|e| e.timestamp),
        predicted_run_out: predict_run_out(now, query.current_quantity, consumption_rate),
        confidence: TrendConfidence::from_consumed(total_consumed),
        event_count: selected.len(),
    };

    tracing::debug!(
        barcode = %trend.barcode,
        category = %query.category,
        events = trend.event_count,
        consumed = trend.total_consumed,
        rate = trend.consumption_rate,
        "Analyzed consumption"
    );

    Some(trend)
}
