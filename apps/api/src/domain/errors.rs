use thiserror::Error;
use uuid::Uuid;

use crate::domain::league::goal_attribution::GoalAttributionError;

/// Errors that can occur while mutating or persisting the league
#[derive(Debug, Error)]
pub enum LeagueError {
    #[error("{entity} name cannot be empty")]
    EmptyName { entity: &'static str },

    #[error("Team not found: {0}")]
    TeamNotFound(Uuid),

    #[error("Team {0} cannot play against itself")]
    SameTeam(Uuid),

    #[error(transparent)]
    GoalAttribution(#[from] GoalAttributionError),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LeagueError {
    /// Returns true for failures caused by the submitted input rather than storage
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LeagueError::EmptyName { .. }
                | LeagueError::SameTeam(_)
                | LeagueError::GoalAttribution(_)
        )
    }
}

pub type LeagueResult<T> = Result<T, LeagueError>;
