//! Storage layer for teams and fixtures
//!
//! This module provides a clean abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Inserts and full-table reads
//! - `seed`: Demo data used by the `seed` command

pub mod models;
pub mod queries;
pub mod schema;
pub mod seed;

#[cfg(test)]
mod tests;

// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::LeagueDatabase;
pub use seed::{seed_demo_data, SeedReport};
