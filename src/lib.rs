//! League Table Library
//!
//! Stores teams and match fixtures, computes a league table from the results
//! and serves it over HTTP or the command line.
//!
//! ## Features
//!
//! - **Storage**: SQLite-backed teams and fixtures, joined by team name
//! - **Standings**: win = 3, draw = 1, loss = 0; stable ranking on ties
//! - **Filters**: teams without fixtures, case-insensitive team search
//! - **Export**: `Team,Points` CSV download
//! - **Web application**: JSON views over the above, built on axum
//!
//! ## Quick Start
//!
//! ```rust
//! use league_table::{league::compute_standings, storage::*};
//!
//! # fn example() -> league_table::Result<()> {
//! let mut db = LeagueDatabase::new_in_memory()?;
//! seed_demo_data(&mut db)?;
//!
//! let standings = compute_standings(&db.list_teams()?, &db.list_fixtures()?)?;
//! assert_eq!(standings.teams[0].name, "Dinamo Zagreb");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a database file without passing `--db` every time:
//! ```bash
//! export LEAGUE_TABLE_DB=/var/lib/league-table/site.db
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod league;
pub mod server;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{FixtureId, LeagueId, TeamId, Winner};
pub use error::{LeagueError, Result};
pub use league::Standings;

pub const DATABASE_ENV_VAR: &str = "LEAGUE_TABLE_DB";
