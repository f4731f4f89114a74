use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::errors::LeagueResult;
use crate::domain::events::LeagueEvent;
use crate::domain::league::{League, MatchSubmission};
use crate::domain::matches::Match;
use crate::domain::player::Player;
use crate::domain::repositories::LeagueRepository;
use crate::domain::team::Team;

/// JSON file implementation of LeagueRepository
///
/// Keeps the league in memory and writes the whole state to a single JSON
/// file after every successful mutation. A mutation is applied to a copy
/// first; the copy replaces the live state only once it has been written,
/// so a failed write leaves both the file and memory as they were.
pub struct JsonFileLeagueRepository {
    path: PathBuf,
    league: RwLock<League>,
}

impl JsonFileLeagueRepository {
    /// Opens the repository, loading the file if it exists
    ///
    /// A missing file means an empty league; the file is created on the
    /// first mutation.
    ///
    /// # Arguments
    /// * `path` - Location of the JSON document
    pub async fn open(path: impl Into<PathBuf>) -> LeagueResult<Self> {
        let path = path.into();

        let league = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let league: League = serde_json::from_slice(&bytes)?;
                tracing::info!(
                    path = %path.display(),
                    teams = league.teams().len(),
                    players = league.players().len(),
                    matches = league.matches().len(),
                    "Loaded league data"
                );
                league
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "No league data yet, starting empty");
                League::default()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            league: RwLock::new(league),
        })
    }

    /// Returns the location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, league: &League) -> LeagueResult<()> {
        let bytes = serde_json::to_vec_pretty(league)?;

        // write next to the target and rename so readers never see half a file
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        if let Err(err) = tokio::fs::rename(&tmp, &self.path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&tmp).await {
                tracing::warn!(path = %tmp.display(), error = %cleanup, "Failed to remove temporary file");
            }
            return Err(err.into());
        }

        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "League data written");
        Ok(())
    }

    async fn mutate<T>(&self, change: impl FnOnce(&mut League) -> LeagueResult<T>) -> LeagueResult<T> {
        let mut guard = self.league.write().await;

        let mut next = guard.clone();
        let output = change(&mut next)?;

        if next != *guard {
            self.persist(&next).await?;
            *guard = next;
        }

        Ok(output)
    }
}

#[async_trait]
impl LeagueRepository for JsonFileLeagueRepository {
    async fn snapshot(&self) -> LeagueResult<League> {
        Ok(self.league.read().await.clone())
    }

    async fn register_team(
        &self,
        name: &str,
        player_names: &[String],
    ) -> LeagueResult<(Team, Vec<Player>, Vec<LeagueEvent>)> {
        self.mutate(|league| league.register_team(name, player_names))
            .await
    }

    async fn sign_player(&self, team_id: Uuid, name: &str) -> LeagueResult<(Player, LeagueEvent)> {
        self.mutate(|league| league.sign_player(team_id, name)).await
    }

    async fn delete_team(&self, id: Uuid) -> LeagueResult<Option<LeagueEvent>> {
        self.mutate(|league| Ok(league.delete_team(id))).await
    }

    async fn commit_match(&self, submission: &MatchSubmission) -> LeagueResult<(Match, LeagueEvent)> {
        let played_at = Utc::now();
        self.mutate(|league| league.record_match(submission, played_at))
            .await
    }

    async fn delete_match(&self, id: Uuid) -> LeagueResult<Option<LeagueEvent>> {
        self.mutate(|league| Ok(league.delete_match(id))).await
    }
}
