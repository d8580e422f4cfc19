//! Command implementations for the league table CLI

pub mod seed;
pub mod serve;
pub mod table;
pub mod teams;


use std::path::PathBuf;

use tracing::debug;

use crate::{storage::LeagueDatabase, Result, DATABASE_ENV_VAR};

/// Pick the database file: explicit flag, then `LEAGUE_TABLE_DB`, then the
/// per-user cache directory.
pub fn resolve_database_path(db: Option<PathBuf>) -> Result<PathBuf> {
    let from_env = || {
        std::env::var_os(DATABASE_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    };

    match db.or_else(from_env) {
        Some(path) => Ok(path),
        None => LeagueDatabase::default_path(),
    }
}

/// Open the database chosen by [`resolve_database_path`]
pub fn open_database(db: Option<PathBuf>) -> Result<LeagueDatabase> {
    let path = resolve_database_path(db)?;
    debug!(path = %path.display(), "opening database");
    LeagueDatabase::open(&path)
}
