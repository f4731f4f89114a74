//! Integration tests for repository layer
//!
//! These tests verify that the JSON file repository round-trips the whole
//! league through disk, keeps deletes idempotent and never persists a
//! rejected mutation.

use league_api::domain::errors::LeagueError;
use league_api::domain::league::{GoalCount, GoalMap, League, MatchSubmission};
use league_api::domain::repositories::LeagueRepository;
use league_api::domain::team::Team;
use league_api::infrastructure::repositories::JsonFileLeagueRepository;
use std::path::Path;
use uuid::Uuid;

/// Open a repository on a file inside a fresh temporary directory
async fn setup_repo(dir: &Path) -> JsonFileLeagueRepository {
    JsonFileLeagueRepository::open(dir.join("league.json"))
        .await
        .expect("Failed to open league file")
}

fn roster_id(league: &League, team: &Team, name: &str) -> Uuid {
    league
        .roster(team.id())
        .find(|p| p.name() == name)
        .map(|p| p.id())
        .expect("player on roster")
}

#[tokio::test]
async fn test_league_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let repo = setup_repo(dir.path()).await;
    let (a, _, _) = repo
        .register_team("A", &["A1".to_string(), "A2".to_string()])
        .await
        .expect("Failed to register team");
    let (b, _, _) = repo
        .register_team("B", &["B1".to_string()])
        .await
        .expect("Failed to register team");

    let league = repo.snapshot().await.unwrap();
    let a1 = roster_id(&league, &a, "A1");
    let a2 = roster_id(&league, &a, "A2");
    let b1 = roster_id(&league, &b, "B1");

    let (game, _) = repo
        .commit_match(&MatchSubmission {
            team1_id: a.id(),
            team2_id: b.id(),
            score1: 3,
            score2: 1,
            home_goals: GoalMap::from([(a1, GoalCount::from(2u32)), (a2, GoalCount::from(1u32))]),
            away_goals: GoalMap::from([(b1, GoalCount::from(1u32))]),
        })
        .await
        .expect("Failed to commit match");

    let before = repo.snapshot().await.unwrap();
    drop(repo);

    // Test: Reopen and compare everything, including ids and timestamps
    let reopened = setup_repo(dir.path()).await;
    let after = reopened.snapshot().await.unwrap();

    assert_eq!(after, before, "League should round-trip losslessly");
    assert_eq!(after.matches()[0].id(), game.id());
    assert_eq!(after.matches()[0].goals().len(), 4);
    assert_eq!(after.standings()[0].team_id, a.id());
    assert_eq!(after.scorers()[0].player_id, a1);
}

#[tokio::test]
async fn test_team_delete_cascade_is_persisted() {
    let dir = tempfile::tempdir().unwrap();

    let repo = setup_repo(dir.path()).await;
    let (a, _, _) = repo
        .register_team("A", &["A1".to_string()])
        .await
        .unwrap();
    let (b, _, _) = repo
        .register_team("B", &["B1".to_string()])
        .await
        .unwrap();
    repo.commit_match(&MatchSubmission {
        team1_id: a.id(),
        team2_id: b.id(),
        score1: 0,
        score2: 0,
        home_goals: GoalMap::new(),
        away_goals: GoalMap::new(),
    })
    .await
    .unwrap();

    let event = repo.delete_team(a.id()).await.unwrap();
    assert!(event.is_some(), "First delete should remove the team");
    let event = repo.delete_team(a.id()).await.unwrap();
    assert!(event.is_none(), "Second delete should be a no-op");
    drop(repo);

    let league = setup_repo(dir.path()).await.snapshot().await.unwrap();
    assert_eq!(league.teams().len(), 1);
    assert_eq!(league.players().len(), 1);
    assert_eq!(league.matches().len(), 1, "Matches are retained");
    assert!(league.match_history().is_empty());
    assert_eq!(league.standings()[0].played, 0);
}

#[tokio::test]
async fn test_rejected_match_is_not_persisted() {
    let dir = tempfile::tempdir().unwrap();

    let repo = setup_repo(dir.path()).await;
    let (a, _, _) = repo
        .register_team("A", &["A1".to_string()])
        .await
        .unwrap();
    let (b, _, _) = repo
        .register_team("B", &["B1".to_string()])
        .await
        .unwrap();
    let league = repo.snapshot().await.unwrap();
    let a1 = roster_id(&league, &a, "A1");
    let b1 = roster_id(&league, &b, "B1");
    let on_disk = std::fs::read(dir.path().join("league.json")).unwrap();

    let result = repo
        .commit_match(&MatchSubmission {
            team1_id: a.id(),
            team2_id: b.id(),
            score1: 2,
            score2: 2,
            home_goals: GoalMap::from([(a1, GoalCount::from(2u32))]),
            away_goals: GoalMap::from([(b1, GoalCount::from(1u32))]),
        })
        .await;

    assert!(matches!(result, Err(LeagueError::GoalAttribution(_))));
    assert_eq!(
        std::fs::read(dir.path().join("league.json")).unwrap(),
        on_disk,
        "File should be untouched"
    );
    assert!(repo.snapshot().await.unwrap().matches().is_empty());
}

#[tokio::test]
async fn test_delete_match_is_persisted() {
    let dir = tempfile::tempdir().unwrap();

    let repo = setup_repo(dir.path()).await;
    let (a, _, _) = repo.register_team("A", &[]).await.unwrap();
    let (b, _, _) = repo.register_team("B", &[]).await.unwrap();
    let (game, _) = repo
        .commit_match(&MatchSubmission {
            team1_id: a.id(),
            team2_id: b.id(),
            score1: 0,
            score2: 0,
            home_goals: GoalMap::new(),
            away_goals: GoalMap::new(),
        })
        .await
        .unwrap();

    assert!(repo.delete_match(game.id()).await.unwrap().is_some());
    drop(repo);

    let league = setup_repo(dir.path()).await.snapshot().await.unwrap();
    assert!(league.matches().is_empty());
}
