//! Basic database query operations

use super::{models::*, schema::LeagueDatabase};
use crate::cli::types::{FixtureId, LeagueId, TeamId, Winner};
use crate::error::{LeagueError, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::warn;

impl LeagueDatabase {
    /// All teams in insertion order
    pub fn list_teams(&self) -> Result<Vec<Team>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM teams ORDER BY id")?;

        let rows = stmt.query_map([], row_to_team)?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    /// All fixtures in insertion order
    pub fn list_fixtures(&self) -> Result<Vec<Fixture>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, event_date, league_id, home_team, away_team, winner
             FROM fixtures
             ORDER BY id",
        )?;

        let rows = stmt.query_map([], row_to_fixture)?;

        let mut fixtures = Vec::new();
        for row in rows {
            fixtures.push(row?);
        }
        Ok(fixtures)
    }

    /// Insert a new team, returning it with its generated id
    pub fn insert_team(&mut self, name: &str) -> Result<Team> {
        insert_team(&self.conn, name)
    }

    /// Insert a fixture after checking both teams exist and the winner is
    /// one of them or a draw
    pub fn insert_fixture(&mut self, fixture: &NewFixture) -> Result<Fixture> {
        insert_fixture(&self.conn, fixture)
    }

    /// Look up a team by its exact name
    pub fn find_team_by_name(&self, name: &str) -> Result<Option<Team>> {
        find_team_by_name(&self.conn, name)
    }

    pub fn team_count(&self) -> Result<u64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM teams", [], |row| row.get(0))?;
        Ok(count)
    }

    pub fn fixture_count(&self) -> Result<u64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM fixtures", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Run `f` inside a transaction, committing only if it succeeds
    pub fn transaction<T>(&mut self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let tx = self.conn.transaction()?;
        let value = f(&tx)?;
        tx.commit()?;
        Ok(value)
    }
}

pub(crate) fn insert_team(conn: &Connection, name: &str) -> Result<Team> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LeagueError::InvalidTeamName);
    }

    if find_team_by_name(conn, name)?.is_some() {
        warn!(team = name, "rejected duplicate team");
        return Err(LeagueError::DuplicateTeam {
            name: name.to_string(),
        });
    }

    conn.execute("INSERT INTO teams (name) VALUES (?)", params![name])?;

    Ok(Team {
        id: TeamId::new(conn.last_insert_rowid()),
        name: name.to_string(),
    })
}

pub(crate) fn insert_fixture(conn: &Connection, fixture: &NewFixture) -> Result<Fixture> {
    for team in [&fixture.home_team, &fixture.away_team] {
        if find_team_by_name(conn, team)?.is_none() {
            warn!(team = %team, "rejected fixture with unknown team");
            return Err(LeagueError::ReferentialIntegrity { team: team.clone() });
        }
    }

    if let Winner::Team(winner) = &fixture.winner {
        if winner != &fixture.home_team && winner != &fixture.away_team {
            return Err(LeagueError::InvalidWinner {
                winner: winner.clone(),
                home_team: fixture.home_team.clone(),
                away_team: fixture.away_team.clone(),
            });
        }
    }

    conn.execute(
        "INSERT INTO fixtures (event_date, league_id, home_team, away_team, winner)
         VALUES (?, ?, ?, ?, ?)",
        params![
            fixture.event_date,
            fixture.league_id.as_u32(),
            fixture.home_team,
            fixture.away_team,
            fixture.winner.as_str()
        ],
    )?;

    Ok(Fixture {
        id: FixtureId::new(conn.last_insert_rowid()),
        event_date: fixture.event_date.clone(),
        league_id: fixture.league_id,
        home_team: fixture.home_team.clone(),
        away_team: fixture.away_team.clone(),
        winner: fixture.winner.clone(),
    })
}

fn find_team_by_name(conn: &Connection, name: &str) -> Result<Option<Team>> {
    let team = conn
        .query_row(
            "SELECT id, name FROM teams WHERE name = ?",
            params![name],
            row_to_team,
        )
        .optional()?;
    Ok(team)
}

/// Helper to convert database row to Team
fn row_to_team(row: &Row) -> rusqlite::Result<Team> {
    Ok(Team {
        id: TeamId::new(row.get(0)?),
        name: row.get(1)?,
    })
}

/// Helper to convert database row to Fixture
fn row_to_fixture(row: &Row) -> rusqlite::Result<Fixture> {
    let winner: String = row.get(5)?;
    Ok(Fixture {
        id: FixtureId::new(row.get(0)?),
        event_date: row.get(1)?,
        league_id: LeagueId::new(row.get(2)?),
        home_team: row.get(3)?,
        away_team: row.get(4)?,
        winner: Winner::from(winner),
    })
}
