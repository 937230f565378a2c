//! Shared data model: inventory snapshots, recipes and the item event log.
//!
//! These are plain data handed over by the host. The engines in `matching`
//! and `trends` only ever read them.
//!
//! CHANGELOG:
//! - 10/12/2026 - Added shopping list snapshot types
//! - 10/09/2026 - Initial model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LarderError;

/// Storage location of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fridge,
    Freezer,
    Pantry,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fridge => "fridge",
            Category::Freezer => "freezer",
            Category::Pantry => "pantry",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LarderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fridge" => Ok(Category::Fridge),
            "freezer" => Ok(Category::Freezer),
            "pantry" => Ok(Category::Pantry),
            other => Err(LarderError::InvalidCategory(other.to_string())),
        }
    }
}

/// Read-only snapshot of one inventory row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: i64,
    pub barcode: String,
    pub name: String,
    pub category: Category,
    pub quantity: u32,
    /// Fullness of the open unit, 0-100.
    pub usage_level: u8,
    pub parent_id: Option<i64>,
    pub is_original: bool,
}

impl InventoryItem {
    /// Identity used by the event log: a product lives once per category.
    pub fn identity(&self) -> (&str, Category) {
        (self.barcode.as_str(), self.category)
    }
}

/// Textual ingredient requirement of a recipe, e.g. `{"chicken breast", "500g"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    #[serde(default)]
    pub measure: String,
}

impl RecipeIngredient {
    pub fn new(name: impl Into<String>, measure: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            measure: measure.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub ingredients: Vec<RecipeIngredient>,
}

/// Kind of mutation recorded in the item event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Added,
    QuantityIncrement,
    QuantityDecrement,
    Deleted,
    UsageUpdated,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Added => "added",
            EventType::QuantityIncrement => "quantity_increment",
            EventType::QuantityDecrement => "quantity_decrement",
            EventType::Deleted => "deleted",
            EventType::UsageUpdated => "usage_updated",
        }
    }

    /// Events that take units out of the household.
    pub fn is_consumption(&self) -> bool {
        matches!(self, EventType::QuantityDecrement | EventType::Deleted)
    }
}

impl FromStr for EventType {
    type Err = LarderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "added" => Ok(EventType::Added),
            "quantity_increment" => Ok(EventType::QuantityIncrement),
            "quantity_decrement" => Ok(EventType::QuantityDecrement),
            "deleted" => Ok(EventType::Deleted),
            "usage_updated" => Ok(EventType::UsageUpdated),
            other => Err(LarderError::InvalidEventType(other.to_string())),
        }
    }
}

/// One entry of the append-only item event log.
///
/// `barcode`, `name` and `category` are copied into the event when it is
/// written, so history stays usable after `item_id` stops pointing anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemEvent {
    pub item_id: Option<i64>,
    pub barcode: String,
    pub name: String,
    pub category: Category,
    pub event_type: EventType,
    /// Signed delta as written by the mutation handlers (decrements are negative).
    pub quantity_change: Option<i64>,
    pub usage_level_before: Option<i64>,
    pub usage_level_after: Option<i64>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// Urgency attached to a repurchase recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = LarderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(LarderError::InvalidPriority(other.to_string())),
        }
    }
}

/// How an entry got onto the shopping list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShoppingSource {
    Manual,
    AutoSuggestion,
    Recurring,
}

impl FromStr for ShoppingSource {
    type Err = LarderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manual" => Ok(ShoppingSource::Manual),
            "auto_suggestion" => Ok(ShoppingSource::AutoSuggestion),
            "recurring" => Ok(ShoppingSource::Recurring),
            other => Err(LarderError::InvalidSource(other.to_string())),
        }
    }
}

/// Read-only snapshot of a shopping list row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListEntry {
    pub id: i64,
    pub barcode: Option<String>,
    pub name: String,
    pub category: Category,
    pub source: ShoppingSource,
    pub is_purchased: bool,
    pub priority: Priority,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_text() {
        for category in [Category::Fridge, Category::Freezer, Category::Pantry] {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!(matches!(
            "cellar".parse::<Category>(),
            Err(LarderError::InvalidCategory(c)) if c == "cellar"
        ));
    }

    #[test]
    fn test_event_type_parsing() {
        assert_eq!(
            "quantity_decrement".parse::<EventType>().unwrap(),
            EventType::QuantityDecrement
        );
        assert!("eaten".parse::<EventType>().is_err());
        assert!(EventType::Deleted.is_consumption());
        assert!(!EventType::UsageUpdated.is_consumption());
    }

    #[test]
    fn test_priority_orders_high_first() {
        let mut priorities = vec![Priority::Low, Priority::High, Priority::Medium];
        priorities.sort();
        assert_eq!(priorities, vec![Priority::High, Priority::Medium, Priority::Low]);
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let item = InventoryItem {
            id: 1,
            barcode: "123".into(),
            name: "Milk".into(),
            category: Category::Fridge,
            quantity: 2,
            usage_level: 80,
            parent_id: None,
            is_original: true,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["usageLevel"], 80);
        assert_eq!(value["category"], "fridge");
        assert_eq!(value["isOriginal"], true);
    }
}
