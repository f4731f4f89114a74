use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::{LeagueError, LeagueResult};

/// TeamName value object representing a registered team's display name
///
/// # Invariants
/// - Never empty
/// - Stored without leading or trailing whitespace
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamName(String);

impl TeamName {
    /// Creates a new TeamName value object
    ///
    /// # Returns
    /// * `Ok(TeamName)` - The trimmed name
    /// * `Err(LeagueError::EmptyName)` - If nothing is left after trimming
    ///
    /// # Example
    /// ```
    /// use league_api::domain::team::value_objects::TeamName;
    ///
    /// let name = TeamName::new("  Rovers ").expect("valid name");
    /// assert_eq!(name.as_str(), "Rovers");
    /// ```
    pub fn new(name: impl AsRef<str>) -> LeagueResult<Self> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(LeagueError::EmptyName { entity: "Team" });
        }
        Ok(TeamName(trimmed.to_string()))
    }

    /// Returns the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
