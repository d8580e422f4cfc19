//! Database schema and connection management

use crate::error::{LeagueError, Result};
use dirs::cache_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Database connection manager for teams and fixtures.
///
/// Each instance owns its own connection; callers pass it explicitly to the
/// operations that need it.
pub struct LeagueDatabase {
    pub(crate) conn: Connection,
}

impl LeagueDatabase {
    /// Open (or create) the database at `path` and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Create a private in-memory database, mostly for tests
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Default location of the database file
    pub fn default_path() -> Result<PathBuf> {
        let cache_dir = cache_dir().ok_or_else(|| LeagueError::Config {
            message: "Could not determine cache directory".to_string(),
        })?;
        Ok(cache_dir.join("league-table").join("site.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS teams (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE
            )",
            [],
        )?;

        // Fixtures join to teams by name, not by id
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS fixtures (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                event_date TEXT NOT NULL,
                league_id INTEGER NOT NULL,
                home_team TEXT NOT NULL,
                away_team TEXT NOT NULL,
                winner TEXT NOT NULL,
                FOREIGN KEY (home_team) REFERENCES teams(name),
                FOREIGN KEY (away_team) REFERENCES teams(name)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_fixtures_home_team ON fixtures(home_team)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_fixtures_away_team ON fixtures(away_team)",
            [],
        )?;

        Ok(())
    }
}
