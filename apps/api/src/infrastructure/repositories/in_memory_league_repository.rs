use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::errors::LeagueResult;
use crate::domain::events::LeagueEvent;
use crate::domain::league::{League, MatchSubmission};
use crate::domain::matches::Match;
use crate::domain::player::Player;
use crate::domain::repositories::LeagueRepository;
use crate::domain::team::Team;

/// In-memory implementation of LeagueRepository
///
/// Nothing survives a restart. Used by tests and when storage is set to
/// `memory`.
#[derive(Debug, Default)]
pub struct InMemoryLeagueRepository {
    league: RwLock<League>,
}

impl InMemoryLeagueRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with an existing league
    pub fn with_league(league: League) -> Self {
        Self {
            league: RwLock::new(league),
        }
    }
}

#[async_trait]
impl LeagueRepository for InMemoryLeagueRepository {
    async fn snapshot(&self) -> LeagueResult<League> {
        Ok(self.league.read().await.clone())
    }

    async fn register_team(
        &self,
        name: &str,
        player_names: &[String],
    ) -> LeagueResult<(Team, Vec<Player>, Vec<LeagueEvent>)> {
        self.league.write().await.register_team(name, player_names)
    }

    async fn sign_player(&self, team_id: Uuid, name: &str) -> LeagueResult<(Player, LeagueEvent)> {
        self.league.write().await.sign_player(team_id, name)
    }

    async fn delete_team(&self, id: Uuid) -> LeagueResult<Option<LeagueEvent>> {
        Ok(self.league.write().await.delete_team(id))
    }

    async fn commit_match(&self, submission: &MatchSubmission) -> LeagueResult<(Match, LeagueEvent)> {
        self.league.write().await.record_match(submission, Utc::now())
    }

    async fn delete_match(&self, id: Uuid) -> LeagueResult<Option<LeagueEvent>> {
        Ok(self.league.write().await.delete_match(id))
    }
}
