//! Demo data: ten Croatian top-flight teams and twenty results.

use super::{queries, schema::LeagueDatabase, NewFixture};
use crate::cli::types::{LeagueId, Winner};
use crate::error::Result;
use tracing::info;

/// Demo team names, in insertion order
pub const DEMO_TEAMS: [&str; 10] = [
    "Dinamo Zagreb",
    "HNK Rijeka",
    "NK Rudes",
    "NK Lokomotiva Zagreb",
    "NK Varazdin",
    "NK Osijek",
    "Istra 1961",
    "Slaven Belupo",
    "HNK Gorica",
    "Hajduk Split",
];

/// Demo fixtures as (event_date, home, away, winner), all in league 1
pub const DEMO_FIXTURES: [(&str, &str, &str, &str); 20] = [
    ("2024-01-28", "Hajduk Split", "HNK Rijeka", "HNK Rijeka"),
    ("2024-01-28", "HNK Gorica", "NK Lokomotiva Zagreb", "NK Lokomotiva Zagreb"),
    ("2024-01-27", "Istra 1961", "Dinamo Zagreb", "Dinamo Zagreb"),
    ("2024-01-27", "NK Osijek", "NK Rudes", "NK Osijek"),
    ("2024-01-26", "NK Varazdin", "Slaven Belupo", "Slaven Belupo"),
    ("2024-12-17", "Dinamo Zagreb", "Hajduk Split", "Draw"),
    ("2024-12-17", "NK Osijek", "Slaven Belupo", "NK Osijek"),
    ("2024-12-16", "HNK Rijeka", "NK Rudes", "HNK Rijeka"),
    ("2024-12-16", "NK Lokomotiva Zagreb", "Istra 1961", "NK Lokomotiva Zagreb"),
    ("2024-12-15", "HNK Gorica", "NK Varazdin", "NK Varazdin"),
    ("2024-12-10", "HNK Rijeka", "Slaven Belupo", "Slaven Belupo"),
    ("2024-12-10", "NK Varazdin", "NK Osijek", "Draw"),
    ("2024-12-09", "Dinamo Zagreb", "NK Rudes", "Dinamo Zagreb"),
    ("2024-12-09", "HNK Gorica", "Istra 1961", "Draw"),
    ("2024-12-08", "NK Lokomotiva Zagreb", "Hajduk Split", "Draw"),
    ("2024-12-04", "Slaven Belupo", "Dinamo Zagreb", "Dinamo Zagreb"),
    ("2024-12-03", "NK Rudes", "NK Lokomotiva Zagreb", "Draw"),
    ("2024-12-02", "Hajduk Split", "HNK Gorica", "Hajduk Split"),
    ("2024-12-02", "NK Osijek", "HNK Rijeka", "Draw"),
    ("2024-12-01", "Istra 1961", "NK Varazdin", "Istra 1961"),
];

const DEMO_LEAGUE: LeagueId = LeagueId(1);

/// Outcome of a seeding run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub teams_inserted: usize,
    pub fixtures_inserted: usize,
    pub already_seeded: bool,
}

/// Insert the demo teams and fixtures in a single transaction.
///
/// Does nothing if the database already holds teams.
pub fn seed_demo_data(db: &mut LeagueDatabase) -> Result<SeedReport> {
    if db.team_count()? > 0 {
        info!("database already contains teams, skipping seed");
        return Ok(SeedReport {
            teams_inserted: 0,
            fixtures_inserted: 0,
            already_seeded: true,
        });
    }

    let report = db.transaction(|conn| {
        for name in DEMO_TEAMS {
            queries::insert_team(conn, name)?;
        }

        for (event_date, home_team, away_team, winner) in DEMO_FIXTURES {
            let fixture = NewFixture::new(
                event_date,
                DEMO_LEAGUE,
                home_team,
                away_team,
                Winner::parse(winner),
            );
            queries::insert_fixture(conn, &fixture)?;
        }

        Ok(SeedReport {
            teams_inserted: DEMO_TEAMS.len(),
            fixtures_inserted: DEMO_FIXTURES.len(),
            already_seeded: false,
        })
    })?;

    info!(
        teams = report.teams_inserted,
        fixtures = report.fixtures_inserted,
        "seeded demo data"
    );
    Ok(report)
}
