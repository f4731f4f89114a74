use super::value_objects::TeamName;
use crate::domain::errors::LeagueResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Team entity
///
/// A club registered in the league. Players reference a team through its id;
/// matches reference two teams.
///
/// # Invariants
/// - Name is never empty (enforced by [`TeamName`])
/// - Id is unique within the league
///
/// # Example
/// ```
/// use league_api::domain::team::Team;
///
/// let team = Team::new("Rovers").expect("valid team");
/// assert_eq!(team.name(), "Rovers");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    id: Uuid,
    name: TeamName,
    created_at: DateTime<Utc>,
}

impl Team {
    /// Creates a new Team
    ///
    /// # Returns
    /// * `Ok(Team)` - New team with a fresh id
    /// * `Err(LeagueError::EmptyName)` - If the name is blank
    pub fn new(name: impl AsRef<str>) -> LeagueResult<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            name: TeamName::new(name)?,
            created_at: Utc::now(),
        })
    }

    // ===== Getters =====

    /// Returns the team's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the team's name
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the registration timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
