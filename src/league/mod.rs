//! League computations over stored teams and fixtures
//!
//! - `standings`: points table and ranking
//! - `filters`: fixtureless-teams and text search
//! - `export`: CSV serialization of the standings

pub mod export;
pub mod filters;
pub mod standings;

pub use export::{read_standings_csv, standings_csv_bytes, write_standings_csv};
pub use filters::{search, teams_without_fixtures, SearchResult};
pub use standings::{compute_standings, Standings, DRAW_POINTS, WIN_POINTS};
