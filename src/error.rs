//! Error types for the league table application

use thiserror::Error;


pub type Result<T> = std::result::Result<T, LeagueError>;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    /// A fixture names a team that is not stored.
    #[error("Fixture references unknown team: {team}")]
    ReferentialIntegrity { team: String },

    /// Aggregation met a team it cannot score: unknown, or a winner who
    /// did not play in the fixture.
    #[error("{fixture} names team '{team}' that cannot be scored")]
    DataIntegrity { team: String, fixture: String },

    #[error("Winner '{winner}' must be '{home_team}', '{away_team}' or 'Draw'")]
    InvalidWinner {
        winner: String,
        home_team: String,
        away_team: String,
    },

    #[error("Team name must not be empty")]
    InvalidTeamName,

    #[error("Team already exists: {name}")]
    DuplicateTeam { name: String },

    #[error("Not found: {path}")]
    NotFound { path: String },

    /// The request body could not be read as the expected form.
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Invalid league table export: {message}")]
    InvalidExport { message: String },

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Database lock poisoned")]
    LockPoisoned,
}

impl LeagueError {
    /// True for errors caused by the data a caller tried to store.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LeagueError::ReferentialIntegrity { .. }
                | LeagueError::InvalidWinner { .. }
                | LeagueError::InvalidTeamName
                | LeagueError::DuplicateTeam { .. }
        )
    }
}
