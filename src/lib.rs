//! larder library
//!
//! Pantry intelligence over a household inventory: which recipes can be
//! cooked from what is on hand, how fast items are used up, and what to
//! buy next. `matching` and `trends` are pure engines over snapshots;
//! `db` and `commands` are the host side used by the `larder` binary.
//!
//! CHANGELOG:
//! - 10/15/2026 - Added CLI commands and store adapter
//! - 10/09/2026 - Initial library structure

// Core engines
pub mod error;
pub mod matching;
pub mod model;
pub mod trends;

// Host side
pub mod commands;
pub mod config;
pub mod db;
pub mod output;
