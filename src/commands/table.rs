//! League table command implementation

use std::{fs::File, io::BufWriter, path::PathBuf};

use tracing::info;

use crate::{
    league::{compute_standings, write_standings_csv, Standings},
    storage::LeagueDatabase,
    Result,
};

/// Parameters for the table command
#[derive(Debug, Default)]
pub struct TableParams {
    pub as_json: bool,
    /// Write CSV here instead of printing
    pub output: Option<PathBuf>,
}

/// Handle the table command
pub fn handle_table(db: &LeagueDatabase, params: TableParams) -> Result<Standings> {
    let standings = compute_standings(&db.list_teams()?, &db.list_fixtures()?)?;

    if let Some(path) = &params.output {
        let file = BufWriter::new(File::create(path)?);
        write_standings_csv(&standings, file)?;
        info!(path = %path.display(), teams = standings.teams.len(), "exported league table");
        println!("✓ League table written to {}", path.display()); // tarpaulin::skip
    } else if params.as_json {
        println!("{}", serde_json::to_string_pretty(&standings)?); // tarpaulin::skip
    } else {
        print!("{}", render_table(&standings)); // tarpaulin::skip
    }

    Ok(standings)
}

/// Plain-text league table, one team per line
pub fn render_table(standings: &Standings) -> String {
    let width = standings
        .teams
        .iter()
        .map(|team| team.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Team".len());

    let mut out = format!("{:>3}  {:<width$}  {:>6}\n", "Pos", "Team", "Points");
    for (pos, (team, points)) in standings.rows().enumerate() {
        out.push_str(&format!("{:>3}  {:<width$}  {:>6}\n", pos + 1, team, points));
    }
    out
}
