//! League table
//!
//! Folds recorded matches into one row per team and ranks the rows by
//! points, then goal difference, then registration order.

use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::matches::{Match, Outcome};
use crate::domain::team::Team;

/// Points awarded for a win
pub const POINTS_FOR_WIN: u32 = 3;
/// Points awarded for a draw
pub const POINTS_FOR_DRAW: u32 = 1;

/// One team's line in the league table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsRow {
    pub team_id: Uuid,
    pub team_name: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl StandingsRow {
    fn empty(team: &Team) -> Self {
        Self {
            team_id: team.id(),
            team_name: team.name().to_string(),
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    fn record(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.goals_for += scored;
        self.goals_against += conceded;
    }

    fn finish(&mut self) {
        self.goal_difference = i64::from(self.goals_for) - i64::from(self.goals_against);
        self.points = self.wins * POINTS_FOR_WIN + self.draws * POINTS_FOR_DRAW;
    }
}

/// Builds the ranked league table
///
/// Every team gets a row, including teams that have not played. A match is
/// counted only when both of its teams still exist; matches left behind by
/// a deleted team are skipped. Rows are ordered by points, then goal
/// difference, both descending. Remaining ties keep the order in which the
/// teams were registered.
///
/// # Example
/// ```
/// use league_api::domain::league::standings::compute_standings;
/// use league_api::domain::team::Team;
///
/// let teams = vec![Team::new("Rovers").unwrap()];
/// let table = compute_standings(&teams, &[]);
///
/// assert_eq!(table.len(), 1);
/// assert_eq!(table[0].points, 0);
/// ```
pub fn compute_standings(teams: &[Team], matches: &[Match]) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = teams.iter().map(StandingsRow::empty).collect();
    let index: HashMap<Uuid, usize> = teams
        .iter()
        .enumerate()
        .map(|(i, team)| (team.id(), i))
        .collect();

    for m in matches {
        let (Some(&i1), Some(&i2)) = (index.get(&m.team1_id()), index.get(&m.team2_id())) else {
            continue;
        };
        rows[i1].record(m.score1(), m.score2());
        rows[i2].record(m.score2(), m.score1());
        match m.outcome() {
            Outcome::Team1Win => {
                rows[i1].wins += 1;
                rows[i2].losses += 1;
            }
            Outcome::Team2Win => {
                rows[i2].wins += 1;
                rows[i1].losses += 1;
            }
            Outcome::Draw => {
                rows[i1].draws += 1;
                rows[i2].draws += 1;
            }
        }
    }

    for row in &mut rows {
        row.finish();
    }

    // sort_by is stable, which keeps registration order for full ties
    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.goal_difference.cmp(&a.goal_difference))
    });

    rows
}
