use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::goal_attribution::{check_roster, validate_and_build_goal_list, GoalMap, PendingMatch};
use super::scorers::{compute_scorers, ScorerRow};
use super::standings::{compute_standings, StandingsRow};
use crate::domain::errors::{LeagueError, LeagueResult};
use crate::domain::events::LeagueEvent;
use crate::domain::matches::Match;
use crate::domain::player::Player;
use crate::domain::team::Team;

/// League aggregate root
///
/// Owns the three collections the tables are derived from. Collections are
/// append-only vectors, so their order is registration order. Every mutation
/// validates completely before touching any collection; a failed call leaves
/// the league exactly as it was.
///
/// # Invariants
/// - No player references a team that is not in the league
/// - Every stored match passed goal attribution when it was recorded
///
/// # Example
/// ```
/// use league_api::domain::league::League;
///
/// let mut league = League::default();
/// let (team, roster, events) = league
///     .register_team("Rovers", &["Ivanov".to_string(), " ".to_string()])
///     .expect("valid team");
///
/// assert_eq!(roster.len(), 1);
/// assert_eq!(league.roster(team.id()).count(), 1);
/// assert_eq!(events.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct League {
    #[serde(default)]
    teams: Vec<Team>,
    #[serde(default)]
    players: Vec<Player>,
    #[serde(default)]
    matches: Vec<Match>,
}

/// A match result as submitted for recording
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSubmission {
    pub team1_id: Uuid,
    pub team2_id: Uuid,
    pub score1: u32,
    pub score2: u32,
    /// Goal counts for team1's players
    #[serde(default)]
    pub home_goals: GoalMap,
    /// Goal counts for team2's players
    #[serde(default)]
    pub away_goals: GoalMap,
}

impl MatchSubmission {
    pub fn pending(&self) -> PendingMatch {
        PendingMatch {
            team1_id: self.team1_id,
            team2_id: self.team2_id,
            score1: self.score1,
            score2: self.score2,
        }
    }
}

/// A match as listed in the match history, with team names resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSummary {
    pub id: Uuid,
    pub team1_id: Uuid,
    pub team1_name: String,
    pub team2_id: Uuid,
    pub team2_name: String,
    pub score1: u32,
    pub score2: u32,
    pub goals: Vec<Uuid>,
    pub played_at: DateTime<Utc>,
}

impl League {
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Looks up a team; `None` if it was never registered or has been deleted
    pub fn find_team(&self, id: Uuid) -> Option<&Team> {
        self.teams.iter().find(|t| t.id() == id)
    }

    /// Looks up a player; `None` if it does not exist
    pub fn find_player(&self, id: Uuid) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Players registered with the given team, in registration order
    pub fn roster(&self, team_id: Uuid) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(move |p| p.team_id() == team_id)
    }

    /// Registers a team together with its initial roster
    ///
    /// Blank player names are skipped. The team name must not be blank.
    ///
    /// # Returns
    /// * `Ok((Team, Vec<Player>, Vec<LeagueEvent>))` - The new team, its
    ///   roster, then one event for the team and one per signed player
    /// * `Err(LeagueError::EmptyName)` - If the team name is blank
    pub fn register_team(
        &mut self,
        name: &str,
        player_names: &[String],
    ) -> LeagueResult<(Team, Vec<Player>, Vec<LeagueEvent>)> {
        let team = Team::new(name)?;
        let roster: Vec<Player> = player_names
            .iter()
            .filter(|n| !n.trim().is_empty())
            .map(|n| Player::new(n, &team))
            .collect::<LeagueResult<_>>()?;

        let mut events = Vec::with_capacity(roster.len() + 1);
        events.push(LeagueEvent::TeamRegistered {
            team_id: team.id(),
            name: team.name().to_string(),
        });
        events.extend(roster.iter().map(|p| LeagueEvent::PlayerSigned {
            player_id: p.id(),
            team_id: team.id(),
        }));

        self.teams.push(team.clone());
        self.players.extend(roster.iter().cloned());

        Ok((team, roster, events))
    }

    /// Adds one player to an existing team's roster
    pub fn sign_player(&mut self, team_id: Uuid, name: &str) -> LeagueResult<(Player, LeagueEvent)> {
        let team = self
            .find_team(team_id)
            .ok_or(LeagueError::TeamNotFound(team_id))?;
        let player = Player::new(name, team)?;

        self.players.push(player.clone());

        let event = LeagueEvent::PlayerSigned {
            player_id: player.id(),
            team_id,
        };
        Ok((player, event))
    }

    /// Deletes a team and every player on its roster
    ///
    /// Matches the team played are kept. Deleting an unknown id does nothing
    /// and returns `None`.
    pub fn delete_team(&mut self, id: Uuid) -> Option<LeagueEvent> {
        let position = self.teams.iter().position(|t| t.id() == id)?;
        self.teams.remove(position);

        let before = self.players.len();
        self.players.retain(|p| p.team_id() != id);

        Some(LeagueEvent::TeamDeleted {
            team_id: id,
            players_removed: before - self.players.len(),
        })
    }

    /// Validates a submitted result and stores it as a new match
    ///
    /// Both teams must exist and differ, every goal map key must be on the
    /// matching roster, and the goal maps must add up to the score.
    pub fn record_match(
        &mut self,
        submission: &MatchSubmission,
        played_at: DateTime<Utc>,
    ) -> LeagueResult<(Match, LeagueEvent)> {
        let pending = submission.pending();

        for team_id in [pending.team1_id, pending.team2_id] {
            if self.find_team(team_id).is_none() {
                return Err(LeagueError::TeamNotFound(team_id));
            }
        }
        if pending.team1_id == pending.team2_id {
            return Err(LeagueError::SameTeam(pending.team1_id));
        }

        check_roster(
            &pending,
            &submission.home_goals,
            &submission.away_goals,
            &self.players,
        )?;
        let goals =
            validate_and_build_goal_list(&pending, &submission.home_goals, &submission.away_goals)?;

        let game = Match::new(&pending, goals, played_at);
        self.matches.push(game.clone());

        let event = LeagueEvent::MatchRecorded {
            match_id: game.id(),
            team1_id: game.team1_id(),
            team2_id: game.team2_id(),
            score1: game.score1(),
            score2: game.score2(),
        };
        Ok((game, event))
    }

    /// Deletes a match; `None` if there was no such match
    pub fn delete_match(&mut self, id: Uuid) -> Option<LeagueEvent> {
        let position = self.matches.iter().position(|m| m.id() == id)?;
        self.matches.remove(position);
        Some(LeagueEvent::MatchDeleted { match_id: id })
    }

    /// Matches in recording order, leaving out any with a deleted team
    pub fn match_history(&self) -> Vec<MatchSummary> {
        self.matches
            .iter()
            .filter_map(|m| {
                let team1 = self.find_team(m.team1_id())?;
                let team2 = self.find_team(m.team2_id())?;
                Some(MatchSummary {
                    id: m.id(),
                    team1_id: team1.id(),
                    team1_name: team1.name().to_string(),
                    team2_id: team2.id(),
                    team2_name: team2.name().to_string(),
                    score1: m.score1(),
                    score2: m.score2(),
                    goals: m.goals().to_vec(),
                    played_at: m.played_at(),
                })
            })
            .collect()
    }

    /// The league table for the current state
    pub fn standings(&self) -> Vec<StandingsRow> {
        compute_standings(&self.teams, &self.matches)
    }

    /// The scorer leaderboard for the current state
    pub fn scorers(&self) -> Vec<ScorerRow> {
        compute_scorers(&self.players, &self.teams, &self.matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::league::goal_attribution::{GoalAttributionError, GoalCount, Side};
    use crate::domain::league::scorers::UNKNOWN_TEAM;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn player_id(league: &League, name: &str) -> Uuid {
        league
            .players()
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.id())
            .unwrap()
    }

    fn goals(entries: &[(Uuid, u32)]) -> GoalMap {
        entries
            .iter()
            .map(|(id, n)| (*id, GoalCount::from(*n)))
            .collect()
    }

    /// Team A (A1, A2) and Team B (B1)
    fn two_team_league() -> (League, Team, Team) {
        let mut league = League::default();
        let (a, _, _) = league.register_team("A", &names(&["A1", "A2"])).unwrap();
        let (b, _, _) = league.register_team("B", &names(&["B1"])).unwrap();
        (league, a, b)
    }

    fn submission(a: &Team, b: &Team, score1: u32, score2: u32, home: GoalMap, away: GoalMap) -> MatchSubmission {
        MatchSubmission {
            team1_id: a.id(),
            team2_id: b.id(),
            score1,
            score2,
            home_goals: home,
            away_goals: away,
        }
    }

    #[test]
    fn register_team_skips_blank_player_names() {
        let mut league = League::default();

        let (team, roster, events) = league
            .register_team(" Rovers ", &names(&["One", "", "  ", "Two"]))
            .unwrap();

        assert_eq!(team.name(), "Rovers");
        let signed: Vec<&str> = roster.iter().map(|p| p.name()).collect();
        assert_eq!(signed, vec!["One", "Two"]);
        assert_eq!(league.roster(team.id()).count(), 2);
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], LeagueEvent::TeamRegistered { .. }));
    }

    #[test]
    fn register_team_with_blank_name_changes_nothing() {
        let mut league = League::default();

        let result = league.register_team("   ", &names(&["One"]));

        assert!(matches!(result, Err(LeagueError::EmptyName { entity: "Team" })));
        assert_eq!(league, League::default());
    }

    #[test]
    fn sign_player_requires_existing_team() {
        let (mut league, a, _) = two_team_league();

        let (player, event) = league.sign_player(a.id(), "A3").unwrap();
        assert_eq!(player.team_id(), a.id());
        assert_eq!(event.subject_id(), player.id());
        assert_eq!(league.roster(a.id()).count(), 3);

        let missing = Uuid::new_v4();
        assert!(matches!(
            league.sign_player(missing, "Nobody"),
            Err(LeagueError::TeamNotFound(id)) if id == missing
        ));
    }

    #[test]
    fn scenario_three_one() {
        let (mut league, a, b) = two_team_league();
        let (a1, a2, b1) = (
            player_id(&league, "A1"),
            player_id(&league, "A2"),
            player_id(&league, "B1"),
        );

        let (game, event) = league
            .record_match(
                &submission(&a, &b, 3, 1, goals(&[(a1, 2), (a2, 1)]), goals(&[(b1, 1)])),
                Utc::now(),
            )
            .unwrap();

        assert_eq!(game.goals().len(), 4);
        assert!(matches!(event, LeagueEvent::MatchRecorded { score1: 3, score2: 1, .. }));

        let table = league.standings();
        assert_eq!(table[0].team_id, a.id());
        assert_eq!(
            (table[0].played, table[0].wins, table[0].points, table[0].goals_for, table[0].goals_against),
            (1, 1, 3, 3, 1)
        );
        assert_eq!(
            (table[1].played, table[1].losses, table[1].points, table[1].goals_for, table[1].goals_against),
            (1, 1, 0, 1, 3)
        );

        let scorers = league.scorers();
        assert_eq!(scorers[0].player_id, a1);
        assert_eq!(scorers[0].goals, 2);
        assert_eq!(scorers.len(), 3);
    }

    #[test]
    fn mismatched_goal_maps_leave_league_unchanged() {
        let (mut league, a, b) = two_team_league();
        let (a1, b1) = (player_id(&league, "A1"), player_id(&league, "B1"));
        let before = league.clone();

        // goal maps say 2-1, the score says 2-2
        let result = league.record_match(
            &submission(&a, &b, 2, 2, goals(&[(a1, 2)]), goals(&[(b1, 1)])),
            Utc::now(),
        );

        assert!(matches!(
            result,
            Err(LeagueError::GoalAttribution(GoalAttributionError::ScoreMismatch {
                side: Side::Away,
                ..
            }))
        ));
        assert_eq!(league, before);
        assert!(league.matches().is_empty());
    }

    #[test]
    fn goal_for_player_on_wrong_roster_is_rejected() {
        let (mut league, a, b) = two_team_league();
        let b1 = player_id(&league, "B1");

        let result = league.record_match(
            &submission(&a, &b, 1, 0, goals(&[(b1, 1)]), GoalMap::new()),
            Utc::now(),
        );

        assert!(matches!(
            result,
            Err(LeagueError::GoalAttribution(GoalAttributionError::NotOnRoster { .. }))
        ));
        assert!(league.matches().is_empty());
    }

    #[test]
    fn match_requires_two_distinct_existing_teams() {
        let (mut league, a, _) = two_team_league();
        let ghost = Team::new("Ghost").unwrap();

        let against_self = league.record_match(
            &submission(&a, &a, 0, 0, GoalMap::new(), GoalMap::new()),
            Utc::now(),
        );
        assert!(matches!(against_self, Err(LeagueError::SameTeam(_))));

        let against_ghost = league.record_match(
            &submission(&a, &ghost, 0, 0, GoalMap::new(), GoalMap::new()),
            Utc::now(),
        );
        assert!(matches!(against_ghost, Err(LeagueError::TeamNotFound(id)) if id == ghost.id()));
        assert!(league.matches().is_empty());
    }

    #[test]
    fn deleting_a_team_cascades_to_players_and_hides_its_matches() {
        let (mut league, a, b) = two_team_league();
        let (a1, b1) = (player_id(&league, "A1"), player_id(&league, "B1"));
        league
            .record_match(
                &submission(&a, &b, 1, 1, goals(&[(a1, 1)]), goals(&[(b1, 1)])),
                Utc::now(),
            )
            .unwrap();

        let event = league.delete_team(b.id()).unwrap();

        assert_eq!(
            event,
            LeagueEvent::TeamDeleted {
                team_id: b.id(),
                players_removed: 1,
            }
        );
        assert!(league.find_team(b.id()).is_none());
        assert!(league.find_player(b1).is_none());
        assert_eq!(league.roster(b.id()).count(), 0);
        // the match is retained but no longer counted or listed
        assert_eq!(league.matches().len(), 1);
        assert!(league.match_history().is_empty());

        let table = league.standings();
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].played, 0);

        // A1's goal outlives the deleted opponent
        let scorers = league.scorers();
        assert_eq!(scorers.len(), 1);
        assert_eq!(scorers[0].player_id, a1);
        assert_eq!(scorers[0].team_name, "A");
    }

    #[test]
    fn deleting_unknown_ids_is_a_no_op() {
        let (mut league, _, _) = two_team_league();
        let before = league.clone();

        assert!(league.delete_team(Uuid::new_v4()).is_none());
        assert!(league.delete_match(Uuid::new_v4()).is_none());
        assert_eq!(league, before);
    }

    #[test]
    fn delete_match_removes_it_from_tables() {
        let (mut league, a, b) = two_team_league();
        let a1 = player_id(&league, "A1");
        let (game, _) = league
            .record_match(
                &submission(&a, &b, 1, 0, goals(&[(a1, 1)]), GoalMap::new()),
                Utc::now(),
            )
            .unwrap();

        assert_eq!(
            league.delete_match(game.id()),
            Some(LeagueEvent::MatchDeleted { match_id: game.id() })
        );
        assert!(league.delete_match(game.id()).is_none());
        assert!(league.scorers().is_empty());
        assert!(league.standings().iter().all(|r| r.played == 0));
    }

    #[test]
    fn match_history_resolves_names_in_order() {
        let (mut league, a, b) = two_team_league();
        league
            .record_match(&submission(&a, &b, 0, 0, GoalMap::new(), GoalMap::new()), Utc::now())
            .unwrap();
        league
            .record_match(&submission(&b, &a, 0, 0, GoalMap::new(), GoalMap::new()), Utc::now())
            .unwrap();

        let history = league.match_history();

        assert_eq!(history.len(), 2);
        assert_eq!((history[0].team1_name.as_str(), history[0].team2_name.as_str()), ("A", "B"));
        assert_eq!((history[1].team1_name.as_str(), history[1].team2_name.as_str()), ("B", "A"));
    }

    #[test]
    fn serde_round_trip_is_lossless() {
        let (mut league, a, b) = two_team_league();
        let a1 = player_id(&league, "A1");
        league
            .record_match(&submission(&a, &b, 1, 0, goals(&[(a1, 1)]), GoalMap::new()), Utc::now())
            .unwrap();

        let json = serde_json::to_string(&league).unwrap();
        let restored: League = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, league);
    }

    #[test]
    fn orphaned_player_is_labelled_unknown() {
        // a league loaded from storage may contain a player whose team is gone
        let mut league = League::default();
        let (a, _, _) = league.register_team("A", &names(&["A1"])).unwrap();
        let (b, _, _) = league.register_team("B", &[]).unwrap();
        let a1 = player_id(&league, "A1");
        league
            .record_match(&submission(&a, &b, 1, 0, goals(&[(a1, 1)]), GoalMap::new()), Utc::now())
            .unwrap();

        let mut json: serde_json::Value = serde_json::to_value(&league).unwrap();
        json["teams"].as_array_mut().unwrap().remove(0);
        let stale: League = serde_json::from_value(json).unwrap();

        let scorers = stale.scorers();
        assert_eq!(scorers.len(), 1);
        assert_eq!(scorers[0].team_name, UNKNOWN_TEAM);
    }
}
