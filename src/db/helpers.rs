//! Database loaders - turn store rows into model snapshots.
//!
//! These functions accept `&Connection` so the CLI can share one read-only
//! connection across loaders. A row that fails to decode (unknown enum text,
//! bad JSON, out-of-range numbers) is logged and skipped; only SQL failures
//! abort a load.
//!
//! CHANGELOG:
//! - 10/14/2026 - Skip undecodable rows instead of failing the whole load
//! - 10/13/2026 - Initial loaders

use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use tracing::warn;

use super::queries;
use crate::error::LarderError;
use crate::model::{
    Category, InventoryItem, ItemEvent, Recipe, RecipeIngredient, ShoppingListEntry,
};

// ============================================================================
// Loaders
// ============================================================================

/// Load every inventory row.
pub fn load_inventory(conn: &Connection) -> Result<Vec<InventoryItem>> {
    let mut stmt = conn.prepare(queries::INVENTORY)?;
    let rows = stmt.query_map([], |row| Ok(decode_item(row)))?;
    collect_decoded(rows, "items")
}

/// Load the event slice of one identity with `timestamp >= since`, newest first.
pub fn load_events(
    conn: &Connection,
    barcode: &str,
    category: Category,
    since: DateTime<Utc>,
) -> Result<Vec<ItemEvent>> {
    let mut stmt = conn.prepare(queries::EVENTS_FOR_IDENTITY)?;
    let rows = stmt.query_map(
        params![barcode, category.as_str(), since.timestamp()],
        |row| Ok(decode_event(row)),
    )?;
    collect_decoded(rows, "item_events")
}

/// Load cached recipes, optionally only those of `category`.
pub fn load_recipes(conn: &Connection, category: Option<&str>) -> Result<Vec<Recipe>> {
    let mut stmt = conn.prepare(queries::RECIPES)?;
    let rows = stmt.query_map(params![category], |row| Ok(decode_recipe(row)))?;
    collect_decoded(rows, "recipes")
}

/// Load shopping list entries that are still waiting to be bought.
pub fn load_open_shopping_list(conn: &Connection) -> Result<Vec<ShoppingListEntry>> {
    let mut stmt = conn.prepare(queries::OPEN_SHOPPING_LIST)?;
    let rows = stmt.query_map([], |row| Ok(decode_shopping_entry(row)))?;
    collect_decoded(rows, "shopping_list_items")
}

// ============================================================================
// Row decoding
// ============================================================================

type Decoded<T> = std::result::Result<T, LarderError>;

fn collect_decoded<T, I>(rows: I, table: &str) -> Result<Vec<T>>
where
    I: Iterator<Item = rusqlite::Result<Decoded<T>>>,
{
    let mut out = Vec::new();
    for row in rows {
        match row? {
            Ok(value) => out.push(value),
            Err(e) => warn!(table, error = %e, "Skipping undecodable row"),
        }
    }
    Ok(out)
}

fn decode_item(row: &Row<'_>) -> Decoded<InventoryItem> {
    let category: String = row.get(3)?;
    let quantity: i64 = row.get(4)?;
    let usage_level: Option<i64> = row.get(5)?;

    Ok(InventoryItem {
        id: row.get(0)?,
        barcode: row.get(1)?,
        name: row.get(2)?,
        category: category.parse()?,
        quantity: u32::try_from(quantity).map_err(|_| LarderError::OutOfRange {
            field: "quantity",
            value: quantity,
        })?,
        usage_level: usage_level_percent(usage_level)?,
        parent_id: row.get(6)?,
        is_original: row.get(7)?,
    })
}

fn decode_event(row: &Row<'_>) -> Decoded<ItemEvent> {
    let category: String = row.get(3)?;
    let event_type: String = row.get(4)?;
    let timestamp: i64 = row.get(8)?;
    let metadata: Option<String> = row.get(9)?;

    Ok(ItemEvent {
        item_id: row.get(0)?,
        barcode: row.get(1)?,
        name: row.get(2)?,
        category: category.parse()?,
        event_type: event_type.parse()?,
        quantity_change: row.get(5)?,
        usage_level_before: row.get(6)?,
        usage_level_after: row.get(7)?,
        timestamp: unix_seconds(timestamp)?,
        metadata: match metadata {
            Some(text) => serde_json::from_str(&text)?,
            None => serde_json::Value::Null,
        },
    })
}

fn decode_recipe(row: &Row<'_>) -> Decoded<Recipe> {
    let ingredients: Option<String> = row.get(4)?;
    let ingredients: Vec<RecipeIngredient> = match ingredients {
        Some(text) => serde_json::from_str::<Option<Vec<RecipeIngredient>>>(&text)?.unwrap_or_default(),
        None => Vec::new(),
    };

    Ok(Recipe {
        id: row.get(0)?,
        name: row.get(1)?,
        category: row.get(2)?,
        area: row.get(3)?,
        ingredients,
    })
}

fn decode_shopping_entry(row: &Row<'_>) -> Decoded<ShoppingListEntry> {
    let category: String = row.get(3)?;
    let source: String = row.get(4)?;
    let priority: String = row.get(6)?;

    Ok(ShoppingListEntry {
        id: row.get(0)?,
        barcode: row.get(1)?,
        name: row.get(2)?,
        category: category.parse()?,
        source: source.parse()?,
        is_purchased: row.get(5)?,
        priority: priority.parse()?,
        notes: row.get(7)?,
    })
}

/// NULL usage means an untouched unit.
fn usage_level_percent(value: Option<i64>) -> Decoded<u8> {
    match value {
        None => Ok(100),
        Some(v @ 0..=100) => Ok(v as u8),
        Some(v) => Err(LarderError::OutOfRange {
            field: "usage_level",
            value: v,
        }),
    }
}

fn unix_seconds(secs: i64) -> Decoded<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or(LarderError::InvalidTimestamp(secs))
}
