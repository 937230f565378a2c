//! SQL queries for the larder store.
//!
//! Timestamps are unix seconds. `recipes.ingredients` and
//! `item_events.metadata` hold JSON text.

/// All inventory rows, originals and split portions alike.
pub const INVENTORY: &str = r#"
SELECT
    id,
    barcode,
    name,
    category,
    quantity,
    usage_level,
    parent_id,
    is_original
FROM items
ORDER BY id
"#;

/// Event slice for one identity since a cutoff, newest first.
pub const EVENTS_FOR_IDENTITY: &str = r#"
SELECT
    item_id,
    barcode,
    name,
    category,
    event_type,
    quantity_change,
    usage_level_before,
    usage_level_after,
    timestamp,
    metadata
FROM item_events
WHERE barcode = ?1
  AND category = ?2
  AND timestamp >= ?3
ORDER BY timestamp DESC, id DESC
"#;

/// Cached recipes, optionally restricted to one category (`?1` may be NULL).
pub const RECIPES: &str = r#"
SELECT
    id,
    name,
    category,
    area,
    ingredients
FROM recipes
WHERE ?1 IS NULL OR category = ?1
ORDER BY id
"#;

/// Shopping list entries not yet purchased.
pub const OPEN_SHOPPING_LIST: &str = r#"
SELECT
    id,
    barcode,
    name,
    category,
    source,
    is_purchased,
    priority,
    notes
FROM shopping_list_items
WHERE is_purchased = 0
ORDER BY id
"#;
