//! Team and fixture filters used by the list views.

use serde::Serialize;
use std::collections::HashSet;

use crate::storage::{Fixture, Team};


/// Teams whose names matched a search, plus the fixtures they played in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub teams: Vec<Team>,
    pub fixtures: Vec<Fixture>,
}

/// Teams that appear in no fixture, home or away, in list order.
pub fn teams_without_fixtures(teams: &[Team], fixtures: &[Fixture]) -> Vec<Team> {
    let scheduled: HashSet<&str> = fixtures.iter().flat_map(Fixture::teams).collect();

    teams
        .iter()
        .filter(|team| !scheduled.contains(team.name.as_str()))
        .cloned()
        .collect()
}

/// Case-insensitive substring search over team names.
///
/// Returns the matching teams and every fixture in which one of them played.
/// An empty query matches everything.
pub fn search(teams: &[Team], fixtures: &[Fixture], query: &str) -> SearchResult {
    let query = query.to_lowercase();

    let matching: Vec<Team> = teams
        .iter()
        .filter(|team| team.name.to_lowercase().contains(&query))
        .cloned()
        .collect();

    let names: HashSet<&str> = matching.iter().map(|team| team.name.as_str()).collect();

    let fixtures = fixtures
        .iter()
        .filter(|fixture| fixture.teams().iter().any(|name| names.contains(name)))
        .cloned()
        .collect();

    SearchResult {
        teams: matching,
        fixtures,
    }
}
