//! League table computation.
//!
//! A win is worth [`WIN_POINTS`], a draw gives [`DRAW_POINTS`] to both sides
//! and a loss is worth nothing. Teams are ranked by points, highest first;
//! teams level on points keep the order they were listed in.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::cli::types::Winner;
use crate::error::{LeagueError, Result};
use crate::storage::{Fixture, Team};


pub const WIN_POINTS: u32 = 3;
pub const DRAW_POINTS: u32 = 1;

/// Ranked teams together with each team's point total
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standings {
    /// Teams sorted by points, descending
    pub teams: Vec<Team>,
    /// Points keyed by team name
    pub team_points: BTreeMap<String, u32>,
}

impl Standings {
    /// `(team name, points)` pairs in ranked order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.teams.iter().map(move |team| {
            let points = self.team_points.get(&team.name).copied().unwrap_or(0);
            (team.name.as_str(), points)
        })
    }

    pub fn points_for(&self, team: &str) -> Option<u32> {
        self.team_points.get(team).copied()
    }

    pub fn total_points(&self) -> u32 {
        self.team_points.values().sum()
    }
}

/// Tally points for every team over all fixtures and rank the teams.
///
/// Team names must be unique, since fixtures refer to teams by name; a
/// repeated name fails with [`LeagueError::DuplicateTeam`]. Fails with
/// [`LeagueError::DataIntegrity`] when a fixture names a team missing from
/// `teams`, or when a decisive winner is neither the home nor the away side.
pub fn compute_standings(teams: &[Team], fixtures: &[Fixture]) -> Result<Standings> {
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(teams.len());
    for (i, team) in teams.iter().enumerate() {
        if index.insert(team.name.as_str(), i).is_some() {
            return Err(LeagueError::DuplicateTeam {
                name: team.name.clone(),
            });
        }
    }

    let slot = |team: &str, fixture: &Fixture| {
        index
            .get(team)
            .copied()
            .ok_or_else(|| integrity_error(team, fixture))
    };

    let mut points = vec![0u32; teams.len()];
    for fixture in fixtures {
        let home = slot(&fixture.home_team, fixture)?;
        let away = slot(&fixture.away_team, fixture)?;

        match &fixture.winner {
            Winner::Draw => {
                points[home] += DRAW_POINTS;
                points[away] += DRAW_POINTS;
            }
            Winner::Team(winner) if *winner == fixture.home_team => points[home] += WIN_POINTS,
            Winner::Team(winner) if *winner == fixture.away_team => points[away] += WIN_POINTS,
            Winner::Team(winner) => return Err(integrity_error(winner, fixture)),
        }
    }

    // sort_by is stable, so ties keep list order
    let mut order: Vec<usize> = (0..teams.len()).collect();
    order.sort_by(|&a, &b| points[b].cmp(&points[a]));

    let team_points = teams
        .iter()
        .zip(&points)
        .map(|(team, &p)| (team.name.clone(), p))
        .collect();

    Ok(Standings {
        teams: order.into_iter().map(|i| teams[i].clone()).collect(),
        team_points,
    })
}

fn integrity_error(team: &str, fixture: &Fixture) -> LeagueError {
    LeagueError::DataIntegrity {
        team: team.to_string(),
        fixture: fixture.to_string(),
    }
}
