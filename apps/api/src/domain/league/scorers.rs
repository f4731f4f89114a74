//! Top scorers
//!
//! Counts every goal in every recorded match, whatever happened to the teams
//! that played it, and lists the players who still exist with at least one
//! goal.

use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::matches::Match;
use crate::domain::player::Player;
use crate::domain::team::Team;

/// Team name shown for a scorer whose team has been deleted
pub const UNKNOWN_TEAM: &str = "N/A";

/// One line of the scorer leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScorerRow {
    pub player_id: Uuid,
    pub player_name: String,
    pub team_name: String,
    pub goals: u32,
}

/// Builds the scorer leaderboard
///
/// Only players with at least one goal appear. Goals in matches whose teams
/// are gone still count as long as the player record remains. Rows are
/// ordered by goals descending; ties keep player registration order.
pub fn compute_scorers(players: &[Player], teams: &[Team], matches: &[Match]) -> Vec<ScorerRow> {
    let mut tally: HashMap<Uuid, u32> = HashMap::new();
    for player_id in matches.iter().flat_map(|m| m.goals()) {
        *tally.entry(*player_id).or_insert(0) += 1;
    }

    let team_names: HashMap<Uuid, &str> = teams.iter().map(|t| (t.id(), t.name())).collect();

    let mut rows: Vec<ScorerRow> = players
        .iter()
        .filter_map(|player| {
            let goals = tally.get(&player.id()).copied().unwrap_or(0);
            if goals == 0 {
                return None;
            }
            let team_name = team_names
                .get(&player.team_id())
                .copied()
                .unwrap_or(UNKNOWN_TEAM);
            Some(ScorerRow {
                player_id: player.id(),
                player_name: player.name().to_string(),
                team_name: team_name.to_string(),
                goals,
            })
        })
        .collect();

    rows.sort_by(|a, b| b.goals.cmp(&a.goals));
    rows
}
