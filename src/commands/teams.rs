//! Team listing command implementation

use crate::{
    league::filters,
    server::TeamsView,
    storage::{Fixture, LeagueDatabase, Team},
    Result,
};

/// Parameters for the teams command
#[derive(Debug, Default)]
pub struct TeamsParams {
    pub search: Option<String>,
    pub without_fixtures: bool,
    pub as_json: bool,
}

/// Handle the teams command
pub fn handle_teams(db: &LeagueDatabase, params: TeamsParams) -> Result<TeamsView> {
    let view = build_teams_view(db.list_teams()?, db.list_fixtures()?, &params);

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&view)?); // tarpaulin::skip
    } else {
        print!("{}", render_teams(&view)); // tarpaulin::skip
    }

    Ok(view)
}

/// Apply the requested filter to the full team and fixture lists
pub fn build_teams_view(teams: Vec<Team>, fixtures: Vec<Fixture>, params: &TeamsParams) -> TeamsView {
    if params.without_fixtures {
        return TeamsView {
            teams: filters::teams_without_fixtures(&teams, &fixtures),
            fixtures: Vec::new(),
            show_without_fixtures: true,
        };
    }

    match &params.search {
        Some(query) => {
            let result = filters::search(&teams, &fixtures, query);
            TeamsView {
                teams: result.teams,
                fixtures: result.fixtures,
                show_without_fixtures: false,
            }
        }
        None => TeamsView {
            teams,
            fixtures,
            show_without_fixtures: false,
        },
    }
}

pub fn render_teams(view: &TeamsView) -> String {
    let mut out = format!("Teams ({}):\n", view.teams.len());
    for team in &view.teams {
        out.push_str(&format!("  {}\n", team.name));
    }

    if !view.show_without_fixtures {
        out.push_str(&format!("Fixtures ({}):\n", view.fixtures.len()));
        for fixture in &view.fixtures {
            out.push_str(&format!(
                "  {}  {} vs {}  ({})\n",
                fixture.event_date, fixture.home_team, fixture.away_team, fixture.winner
            ));
        }
    }
    out
}
