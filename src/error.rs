//! Error types.

use thiserror::Error;

/// Errors raised when decoding host data into the model.
///
/// The matching and trend engines never fail; these only surface from
/// parsing store rows or CLI arguments.
#[derive(Error, Debug)]
pub enum LarderError {
    #[error("Invalid category: {0} (expected fridge, freezer or pantry)")]
    InvalidCategory(String),

    #[error("Invalid event type: {0}")]
    InvalidEventType(String),

    #[error("Invalid priority: {0}")]
    InvalidPriority(String),

    #[error("Invalid shopping list source: {0}")]
    InvalidSource(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(i64),

    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: i64 },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
