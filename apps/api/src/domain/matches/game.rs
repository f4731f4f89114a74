use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::league::goal_attribution::PendingMatch;

/// Outcome of a match from the first team's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Team1Win,
    Team2Win,
    Draw,
}

/// Match entity
///
/// A recorded result between two teams. Matches are created once and never
/// edited; the goal list holds one player id per goal scored, in no
/// particular order.
///
/// # Invariants
/// - Goals scored by team1's roster add up to `score1`, team2's to `score2`
///   (checked by goal attribution before construction, never re-checked)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    id: Uuid,
    team1_id: Uuid,
    team2_id: Uuid,
    score1: u32,
    score2: u32,
    goals: Vec<Uuid>,
    played_at: DateTime<Utc>,
}

impl Match {
    /// Creates a match from a pending descriptor and its attributed goal list
    ///
    /// The goal list is expected to come from
    /// [`validate_and_build_goal_list`](crate::domain::league::goal_attribution::validate_and_build_goal_list).
    pub fn new(pending: &PendingMatch, goals: Vec<Uuid>, played_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            team1_id: pending.team1_id,
            team2_id: pending.team2_id,
            score1: pending.score1,
            score2: pending.score2,
            goals,
            played_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn team1_id(&self) -> Uuid {
        self.team1_id
    }

    pub fn team2_id(&self) -> Uuid {
        self.team2_id
    }

    pub fn score1(&self) -> u32 {
        self.score1
    }

    pub fn score2(&self) -> u32 {
        self.score2
    }

    /// Returns the goal list, one scorer id per goal
    pub fn goals(&self) -> &[Uuid] {
        &self.goals
    }

    pub fn played_at(&self) -> DateTime<Utc> {
        self.played_at
    }

    /// Classifies the result by comparing the two scores
    pub fn outcome(&self) -> Outcome {
        match self.score1.cmp(&self.score2) {
            std::cmp::Ordering::Greater => Outcome::Team1Win,
            std::cmp::Ordering::Less => Outcome::Team2Win,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}
