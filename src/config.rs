//! Host configuration.
//!
//! Thresholds live next to the engines that use them (see `matching::ranker`
//! and `trends::suggest`); this module only resolves where the store is.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable overriding the database location.
pub const DB_PATH_ENV: &str = "LARDER_DB_PATH";

const APP_DIR: &str = "larder";
const DB_FILE: &str = "larder.db";

/// Default database path: `$LARDER_DB_PATH`, else `<data dir>/larder/larder.db`.
pub fn default_db_path() -> PathBuf {
    resolve_db_path(std::env::var_os(DB_PATH_ENV), dirs::data_dir())
}

fn resolve_db_path(env_override: Option<OsString>, data_dir: Option<PathBuf>) -> PathBuf {
    if let Some(path) = env_override.filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    data_dir
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(DB_FILE)
}
