use uuid::Uuid;

/// Domain events emitted by league mutations
///
/// Every successful store mutation returns the events it produced so callers
/// can log or publish them. A delete that finds nothing produces no event.
///
/// # Example
/// ```
/// use league_api::domain::events::LeagueEvent;
/// use uuid::Uuid;
///
/// let event = LeagueEvent::MatchDeleted {
///     match_id: Uuid::new_v4(),
/// };
/// assert_eq!(event.name(), "match_deleted");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum LeagueEvent {
    /// Fired when a team is registered
    TeamRegistered {
        /// ID of the new team
        team_id: Uuid,
        /// Trimmed team name
        name: String,
    },
    /// Fired once per player added to a roster
    PlayerSigned {
        /// ID of the new player
        player_id: Uuid,
        /// Team the player joined
        team_id: Uuid,
    },
    /// Fired when a team is removed together with its roster
    TeamDeleted {
        /// ID of the removed team
        team_id: Uuid,
        /// Number of players removed by the cascade
        players_removed: usize,
    },
    /// Fired when a match passes goal attribution and is stored
    MatchRecorded {
        /// ID of the new match
        match_id: Uuid,
        team1_id: Uuid,
        team2_id: Uuid,
        score1: u32,
        score2: u32,
    },
    /// Fired when a match is removed
    MatchDeleted {
        /// ID of the removed match
        match_id: Uuid,
    },
}

impl LeagueEvent {
    /// Returns a stable snake_case name for logging
    pub fn name(&self) -> &'static str {
        match self {
            LeagueEvent::TeamRegistered { .. } => "team_registered",
            LeagueEvent::PlayerSigned { .. } => "player_signed",
            LeagueEvent::TeamDeleted { .. } => "team_deleted",
            LeagueEvent::MatchRecorded { .. } => "match_recorded",
            LeagueEvent::MatchDeleted { .. } => "match_deleted",
        }
    }

    /// Returns the id of the entity this event is about
    pub fn subject_id(&self) -> Uuid {
        match self {
            LeagueEvent::TeamRegistered { team_id, .. } => *team_id,
            LeagueEvent::PlayerSigned { player_id, .. } => *player_id,
            LeagueEvent::TeamDeleted { team_id, .. } => *team_id,
            LeagueEvent::MatchRecorded { match_id, .. } => *match_id,
            LeagueEvent::MatchDeleted { match_id } => *match_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_registered_event() {
        let team_id = Uuid::new_v4();
        let event = LeagueEvent::TeamRegistered {
            team_id,
            name: "Rovers".to_string(),
        };

        assert_eq!(event.subject_id(), team_id);
        assert_eq!(event.name(), "team_registered");
    }

    #[test]
    fn player_signed_event_is_about_the_player() {
        let player_id = Uuid::new_v4();
        let event = LeagueEvent::PlayerSigned {
            player_id,
            team_id: Uuid::new_v4(),
        };

        assert_eq!(event.subject_id(), player_id);
    }

    #[test]
    fn match_recorded_event() {
        let match_id = Uuid::new_v4();
        let event = LeagueEvent::MatchRecorded {
            match_id,
            team1_id: Uuid::new_v4(),
            team2_id: Uuid::new_v4(),
            score1: 3,
            score2: 1,
        };

        assert_eq!(event.subject_id(), match_id);
        assert_eq!(event.name(), "match_recorded");
    }

    #[test]
    fn event_clone() {
        let event = LeagueEvent::TeamDeleted {
            team_id: Uuid::new_v4(),
            players_removed: 2,
        };
        let cloned = event.clone();

        assert_eq!(event, cloned);
    }
}
