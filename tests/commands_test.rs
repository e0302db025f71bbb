//! Integration tests for command handlers

use baseball_stats::{
    cli::{AdminCmd, BaseballStats, Commands},
    commands::{
        admin::handle_admin,
        browse::{leader_rows, player_rows},
        common::open_store,
        resolve_api_url, resolve_db_path,
    },
    roster::Roster,
    seed::MockSeed,
    storage::Store,
    PlayerId, StatCategory, StatsError, API_URL_ENV_VAR, DB_PATH_ENV_VAR,
};
use clap::Parser;
use tempfile::TempDir;

fn parse(args: &[&str]) -> BaseballStats {
    let mut argv = vec!["baseball-stats"];
    argv.extend_from_slice(args);
    BaseballStats::try_parse_from(argv).unwrap()
}

fn admin(args: &[&str]) -> AdminCmd {
    let mut argv = vec!["admin"];
    argv.extend_from_slice(args);
    match parse(&argv).command {
        Commands::Admin { cmd } => cmd,
        other => panic!("Expected admin command, got {:?}", other),
    }
}

#[test]
fn test_env_overrides() {
    std::env::set_var(DB_PATH_ENV_VAR, "/tmp/from-env.db");
    std::env::set_var(API_URL_ENV_VAR, "http://from-env");

    assert_eq!(
        resolve_db_path(None).unwrap(),
        std::path::PathBuf::from("/tmp/from-env.db")
    );
    assert_eq!(resolve_api_url(None), "http://from-env");

    std::env::remove_var(DB_PATH_ENV_VAR);
    std::env::remove_var(API_URL_ENV_VAR);
}

#[test]
fn test_admin_workflow_against_disk_store() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("store.db");
    let mut store = open_store(Some(db.clone())).unwrap();

    match handle_admin(&mut store, MockSeed, admin(&["team", "add", "--name", "Oakland Oaks"])) {
        Err(StatsError::NotAuthenticated) => {}
        other => panic!("Expected NotAuthenticated, got {:?}", other),
    }

    handle_admin(
        &mut store,
        MockSeed,
        admin(&["login", "--username", "admin", "--password", "admin123"]),
    )
    .unwrap();

    match handle_admin(&mut store, MockSeed, admin(&["team", "add", "--name", "Oakland Oaks"])) {
        Err(StatsError::MissingField { field }) => assert_eq!(field, "abbreviation"),
        other => panic!("Expected MissingField, got {:?}", other),
    }

    handle_admin(
        &mut store,
        MockSeed,
        admin(&[
            "team", "add", "--name", "Oakland Oaks", "--abbreviation", "oak", "--league", "nl",
        ]),
    )
    .unwrap();
    handle_admin(
        &mut store,
        MockSeed,
        admin(&[
            "stats", "player", "8", "--at-bats", "300", "--hits", "90", "--home-runs", "50",
        ]),
    )
    .unwrap();
    drop(store);

    // reopen to make sure everything reached the file
    let mut store = open_store(Some(db)).unwrap();
    let mut roster = Roster::new(&mut store, MockSeed);

    let teams = roster.teams().unwrap();
    let oaks = teams.iter().find(|t| t.abbreviation == "OAK").unwrap();
    assert!(oaks.id.as_str().starts_with("team_"));

    let hr = leader_rows(&mut roster, StatCategory::HomeRuns, 1).unwrap();
    assert_eq!(hr[0].player_id, PlayerId::new("8"));
    assert_eq!(hr[0].value, 50.0);

    let crawford = player_rows(&mut roster, Some("crawford"), None).unwrap();
    assert_eq!(crawford[0].stats.unwrap().batting_average, 0.3);
}

#[test]
fn test_logout_then_status() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(Some(dir.path().join("store.db"))).unwrap();

    handle_admin(
        &mut store,
        MockSeed,
        admin(&["login", "-u", "admin", "-p", "admin123"]),
    )
    .unwrap();
    handle_admin(&mut store, MockSeed, admin(&["status"])).unwrap();
    handle_admin(&mut store, MockSeed, admin(&["logout"])).unwrap();

    assert!(store
        .get(baseball_stats::storage::keys::ADMIN_SESSION)
        .unwrap()
        .is_none());
}
