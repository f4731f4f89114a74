use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::{LeagueError, LeagueResult};
use crate::domain::team::Team;

/// Player entity
///
/// A player always belongs to exactly one team. The reference is checked when
/// the player is created; it can only dangle afterwards if the team itself is
/// deleted, and the league removes the roster in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: Uuid,
    name: String,
    team_id: Uuid,
}

impl Player {
    /// Creates a new Player on the given team's roster
    ///
    /// Taking the team by reference means a player can only be created for a
    /// team that exists.
    ///
    /// # Example
    /// ```
    /// use league_api::domain::player::Player;
    /// use league_api::domain::team::Team;
    ///
    /// let team = Team::new("Rovers").expect("valid team");
    /// let player = Player::new(" Ivanov ", &team).expect("valid player");
    ///
    /// assert_eq!(player.name(), "Ivanov");
    /// assert_eq!(player.team_id(), team.id());
    /// ```
    pub fn new(name: impl AsRef<str>, team: &Team) -> LeagueResult<Self> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(LeagueError::EmptyName { entity: "Player" });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            team_id: team.id(),
        })
    }

    /// Returns the player's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ID of the team this player is registered with
    pub fn team_id(&self) -> Uuid {
        self.team_id
    }
}
