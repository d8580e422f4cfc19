//! Data models for the storage layer

use crate::cli::types::{FixtureId, LeagueId, TeamId, Winner};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A team stored in the database. Names are unique and act as the join key
/// for fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

/// A single match between two stored teams with its recorded outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    pub event_date: String,
    pub league_id: LeagueId,
    pub home_team: String,
    pub away_team: String,
    pub winner: Winner,
}

impl Fixture {
    /// Whether `team` played in this fixture, home or away.
    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }

    /// Home and away team names.
    pub fn teams(&self) -> [&str; 2] {
        [self.home_team.as_str(), self.away_team.as_str()]
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fixture {} - {} vs {}",
            self.id, self.home_team, self.away_team
        )
    }
}

/// Fixture fields supplied on insert; the id is generated by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFixture {
    pub event_date: String,
    pub league_id: LeagueId,
    pub home_team: String,
    pub away_team: String,
    pub winner: Winner,
}

impl NewFixture {
    pub fn new(
        event_date: impl Into<String>,
        league_id: LeagueId,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        winner: Winner,
    ) -> Self {
        Self {
            event_date: event_date.into(),
            league_id,
            home_team: home_team.into(),
            away_team: away_team.into(),
            winner,
        }
    }
}
