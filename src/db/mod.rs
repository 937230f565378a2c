//! Read-only access to the household store.
//!
//! The matching and trend engines never touch the database; the CLI loads
//! snapshots through [`helpers`] and hands them over as plain data.
//!
//! CHANGELOG:
//! - 10/13/2026 - Loaders for inventory, events, recipes and shopping list

pub mod connection;
pub mod helpers;
pub mod queries;

pub use connection::open_db;
pub use helpers::{load_events, load_inventory, load_open_shopping_list, load_recipes};
