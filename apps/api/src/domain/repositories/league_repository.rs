use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::LeagueResult;
use crate::domain::events::LeagueEvent;
use crate::domain::league::{League, MatchSubmission};
use crate::domain::matches::Match;
use crate::domain::player::Player;
use crate::domain::team::Team;

/// Repository trait for the League aggregate
///
/// The store owns the teams, players and matches. Implementations must run
/// each mutation to completion before starting the next one, and must only
/// persist after the in-memory change has validated.
#[async_trait]
pub trait LeagueRepository: Send + Sync {
    /// Returns a copy of the whole league for read-only use
    async fn snapshot(&self) -> LeagueResult<League>;

    /// Register a team with its initial roster
    async fn register_team(
        &self,
        name: &str,
        player_names: &[String],
    ) -> LeagueResult<(Team, Vec<Player>, Vec<LeagueEvent>)>;

    /// Add a player to an existing team
    async fn sign_player(&self, team_id: Uuid, name: &str) -> LeagueResult<(Player, LeagueEvent)>;

    /// Delete a team and its roster; `None` if there was no such team
    async fn delete_team(&self, id: Uuid) -> LeagueResult<Option<LeagueEvent>>;

    /// Validate goal attribution and store the match
    async fn commit_match(&self, submission: &MatchSubmission) -> LeagueResult<(Match, LeagueEvent)>;

    /// Delete a match; `None` if there was no such match
    async fn delete_match(&self, id: Uuid) -> LeagueResult<Option<LeagueEvent>>;
}
