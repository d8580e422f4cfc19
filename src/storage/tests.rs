//! Unit tests for storage functionality

use super::*;
use crate::cli::types::{LeagueId, Winner};
use crate::error::LeagueError;

fn create_test_db() -> LeagueDatabase {
    // Create in-memory database for testing
    let conn = rusqlite::Connection::open_in_memory().unwrap();

    // Enable foreign keys for testing
    conn.execute("PRAGMA foreign_keys = ON", []).unwrap();

    let mut db = LeagueDatabase { conn };
    db.initialize_schema().unwrap();
    db
}

fn create_test_db_with_teams() -> LeagueDatabase {
    let mut db = create_test_db();
    db.insert_team("Dinamo Zagreb").unwrap();
    db.insert_team("Hajduk Split").unwrap();
    db
}

fn fixture(home: &str, away: &str, winner: &str) -> NewFixture {
    NewFixture::new(
        "2024-12-17",
        LeagueId::new(1),
        home,
        away,
        Winner::parse(winner),
    )
}

#[test]
fn test_database_creation() {
    let db = create_test_db();
    assert_eq!(db.team_count().unwrap(), 0);
    assert_eq!(db.fixture_count().unwrap(), 0);
}

#[test]
fn test_insert_team_assigns_ids_in_order() {
    let mut db = create_test_db();

    let first = db.insert_team("NK Osijek").unwrap();
    let second = db.insert_team("HNK Rijeka").unwrap();

    assert!(first.id < second.id);
    assert_eq!(first.name, "NK Osijek");
}

#[test]
fn test_insert_team_trims_name() {
    let mut db = create_test_db();
    let team = db.insert_team("  NK Rudes ").unwrap();
    assert_eq!(team.name, "NK Rudes");
    assert!(db.find_team_by_name("NK Rudes").unwrap().is_some());
}

#[test]
fn test_insert_team_rejects_blank_name() {
    let mut db = create_test_db();
    let result = db.insert_team("   ");
    assert!(matches!(result, Err(LeagueError::InvalidTeamName)));
}

#[test]
fn test_insert_team_rejects_duplicate() {
    let mut db = create_test_db_with_teams();
    let result = db.insert_team("Dinamo Zagreb");

    match result {
        Err(LeagueError::DuplicateTeam { name }) => assert_eq!(name, "Dinamo Zagreb"),
        other => panic!("Expected DuplicateTeam, got {:?}", other),
    }
    assert_eq!(db.team_count().unwrap(), 2);
}

#[test]
fn test_list_teams_preserves_insertion_order() {
    let db = create_test_db_with_teams();
    let names: Vec<String> = db.list_teams().unwrap().into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["Dinamo Zagreb", "Hajduk Split"]);
}

#[test]
fn test_insert_and_list_fixture() {
    let mut db = create_test_db_with_teams();

    let stored = db
        .insert_fixture(&fixture("Dinamo Zagreb", "Hajduk Split", "Draw"))
        .unwrap();

    let fixtures = db.list_fixtures().unwrap();
    assert_eq!(fixtures.len(), 1);
    assert_eq!(fixtures[0], stored);
    assert_eq!(fixtures[0].winner, Winner::Draw);
    assert_eq!(fixtures[0].league_id, LeagueId::new(1));
}

#[test]
fn test_insert_fixture_unknown_home_team() {
    let mut db = create_test_db_with_teams();

    let result = db.insert_fixture(&fixture("Ghost FC", "Hajduk Split", "Hajduk Split"));

    match result {
        Err(LeagueError::ReferentialIntegrity { team }) => assert_eq!(team, "Ghost FC"),
        other => panic!("Expected ReferentialIntegrity, got {:?}", other),
    }
    assert_eq!(db.fixture_count().unwrap(), 0);
}

#[test]
fn test_insert_fixture_unknown_away_team() {
    let mut db = create_test_db_with_teams();

    let result = db.insert_fixture(&fixture("Dinamo Zagreb", "Ghost FC", "Draw"));
    assert!(matches!(
        result,
        Err(LeagueError::ReferentialIntegrity { .. })
    ));
}

#[test]
fn test_insert_fixture_winner_must_be_a_side() {
    let mut db = create_test_db_with_teams();
    db.insert_team("NK Osijek").unwrap();

    let result = db.insert_fixture(&fixture("Dinamo Zagreb", "Hajduk Split", "NK Osijek"));
    assert!(matches!(result, Err(LeagueError::InvalidWinner { .. })));
}

#[test]
fn test_fixture_display() {
    let mut db = create_test_db_with_teams();
    let stored = db
        .insert_fixture(&fixture("Dinamo Zagreb", "Hajduk Split", "Dinamo Zagreb"))
        .unwrap();

    assert_eq!(
        stored.to_string(),
        format!("Fixture {} - Dinamo Zagreb vs Hajduk Split", stored.id)
    );
    assert!(stored.involves("Hajduk Split"));
    assert!(!stored.involves("NK Osijek"));
}

#[test]
fn test_transaction_rolls_back_on_error() {
    let mut db = create_test_db();

    let result = db.transaction(|conn| {
        queries::insert_team(conn, "NK Varazdin")?;
        queries::insert_fixture(conn, &fixture("NK Varazdin", "Ghost FC", "Draw"))?;
        Ok(())
    });

    assert!(result.is_err());
    assert_eq!(db.team_count().unwrap(), 0);
}

#[test]
fn test_seed_demo_data() {
    let mut db = create_test_db();

    let report = seed_demo_data(&mut db).unwrap();

    assert!(!report.already_seeded);
    assert_eq!(report.teams_inserted, 10);
    assert_eq!(report.fixtures_inserted, 20);
    assert_eq!(db.team_count().unwrap(), 10);
    assert_eq!(db.fixture_count().unwrap(), 20);
}

#[test]
fn test_seed_demo_data_is_idempotent() {
    let mut db = create_test_db();
    seed_demo_data(&mut db).unwrap();

    let report = seed_demo_data(&mut db).unwrap();

    assert!(report.already_seeded);
    assert_eq!(report.teams_inserted, 0);
    assert_eq!(db.team_count().unwrap(), 10);
    assert_eq!(db.fixture_count().unwrap(), 20);
}

#[test]
fn test_seed_fixture_order_matches_demo_data() {
    let mut db = create_test_db();
    seed_demo_data(&mut db).unwrap();

    let fixtures = db.list_fixtures().unwrap();
    let first = &fixtures[0];
    assert_eq!(first.event_date, "2024-01-28");
    assert_eq!(first.home_team, "Hajduk Split");
    assert_eq!(first.winner, Winner::Team("HNK Rijeka".to_string()));

    let last = fixtures.last().unwrap();
    assert_eq!(last.home_team, "Istra 1961");
    assert_eq!(last.away_team, "NK Varazdin");
}
