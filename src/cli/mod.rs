//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(name = "league-table", about = "Teams, fixtures and league standings")]
pub struct LeagueCli {
    /// SQLite database file (or set `LEAGUE_TABLE_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the web application.
    Serve {
        /// Address to bind.
        #[clap(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on.
        #[clap(long, short, default_value_t = 5000)]
        port: u16,
    },

    /// Populate the database with the demo teams and fixtures.
    Seed,

    /// Print the league table (win = 3, draw = 1, loss = 0).
    Table {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Write the table as CSV to this file instead of printing it.
        #[clap(long, short)]
        output: Option<PathBuf>,
    },

    /// List teams and their fixtures.
    Teams {
        /// Case-insensitive substring to match against team names.
        #[clap(long, short)]
        search: Option<String>,

        /// Only show teams that have no fixtures.
        #[clap(long, conflicts_with = "search")]
        without_fixtures: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
