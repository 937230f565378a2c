//! Command implementations.
//!
//! CHANGELOG:
//! - 10/15/2026 - Initial module structure

pub mod recipes;
pub mod shopping;
pub mod trends;
