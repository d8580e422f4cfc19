//! Integration tests for command handlers

use std::path::PathBuf;

use league_table::{
    commands::{open_database, resolve_database_path, seed::handle_seed},
    DATABASE_ENV_VAR,
};

#[test]
fn test_resolve_database_path_from_option() {
    let result = resolve_database_path(Some(PathBuf::from("league.db")));
    assert_eq!(result.unwrap(), PathBuf::from("league.db"));
}

#[test]
fn test_resolve_database_path_env_and_fallback() {
    // Single test so the env var is not raced by another test
    std::env::set_var(DATABASE_ENV_VAR, "/tmp/from-env.db");
    let result = resolve_database_path(None).unwrap();
    assert_eq!(result, PathBuf::from("/tmp/from-env.db"));

    // Option should take precedence
    let result = resolve_database_path(Some(PathBuf::from("flag.db"))).unwrap();
    assert_eq!(result, PathBuf::from("flag.db"));

    // Empty value is ignored
    std::env::set_var(DATABASE_ENV_VAR, "");
    if let Ok(path) = resolve_database_path(None) {
        assert!(path.ends_with("league-table/site.db"));
    }

    std::env::remove_var(DATABASE_ENV_VAR);
}

#[test]
fn test_seed_command_on_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.db");

    let mut db = open_database(Some(path.clone())).unwrap();
    let report = handle_seed(&mut db).unwrap();
    assert_eq!(report.teams_inserted, 10);
    assert_eq!(report.fixtures_inserted, 20);

    let report = handle_seed(&mut db).unwrap();
    assert!(report.already_seeded);
    assert!(path.exists());
}
