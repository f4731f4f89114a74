//! Goal attribution
//!
//! Before a match is stored, the per-player goal counts submitted for each
//! side must be consistent with the final score. This module checks that and
//! flattens the counts into the match's goal list.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::iter;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::player::Player;

/// Highest score either side may be credited with in one match
pub const MAX_SCORE: u32 = 999;

/// A match that has a score but no goal list yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingMatch {
    pub team1_id: Uuid,
    pub team2_id: Uuid,
    pub score1: u32,
    pub score2: u32,
}

/// Which team of a pending match a goal map belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// team1, whose goals must add up to `score1`
    Home,
    /// team2, whose goals must add up to `score2`
    Away,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => write!(f, "home"),
            Side::Away => write!(f, "away"),
        }
    }
}

/// A goal count exactly as it was submitted
///
/// Clients may send numbers or the raw text of an input field. The value is
/// kept unparsed so the live total can be lenient while acceptance is strict.
/// Any other JSON value (`null`, booleans, arrays, objects) is kept as well
/// and never counts as a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GoalCount {
    Number(serde_json::Number),
    Text(String),
    Other(serde_json::Value),
}

impl GoalCount {
    /// Parses the value as a non-negative integer, or `None` if it is not one
    ///
    /// # Example
    /// ```
    /// use league_api::domain::league::goal_attribution::GoalCount;
    ///
    /// assert_eq!(GoalCount::from(2u32).strict(), Some(2));
    /// assert_eq!(GoalCount::Text("-1".into()).strict(), None);
    /// assert_eq!(GoalCount::Text("1.5".into()).strict(), None);
    /// ```
    pub fn strict(&self) -> Option<u32> {
        match self {
            GoalCount::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
            GoalCount::Text(s) => s.trim().parse::<u32>().ok(),
            GoalCount::Other(_) => None,
        }
    }

    /// Reads the value for a running total: a leading integer is taken as is,
    /// anything non-numeric or negative counts as zero
    pub fn lenient(&self) -> u32 {
        match self {
            GoalCount::Number(n) => {
                if let Some(v) = n.as_u64() {
                    u32::try_from(v).unwrap_or(u32::MAX)
                } else if let Some(v) = n.as_f64() {
                    if v.is_finite() && v > 0.0 {
                        v.trunc() as u32
                    } else {
                        0
                    }
                } else {
                    0
                }
            }
            GoalCount::Text(s) => match leading_integer(s) {
                Some(v) if v > 0 => u32::try_from(v).unwrap_or(u32::MAX),
                _ => 0,
            },
            GoalCount::Other(_) => 0,
        }
    }

    fn raw(&self) -> String {
        match self {
            GoalCount::Number(n) => n.to_string(),
            GoalCount::Text(s) => s.clone(),
            GoalCount::Other(v) => v.to_string(),
        }
    }
}

impl From<u32> for GoalCount {
    fn from(value: u32) -> Self {
        GoalCount::Number(value.into())
    }
}

/// Goal counts for one side, keyed by player id
///
/// Players with no goals may be left out.
pub type GoalMap = BTreeMap<Uuid, GoalCount>;

/// Reasons a submitted goal attribution is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GoalAttributionError {
    #[error("Player {player_id} is not on the {side} team's roster")]
    NotOnRoster { side: Side, player_id: Uuid },

    #[error("Invalid goal count {value:?} for player {player_id} ({side} side)")]
    InvalidGoalCount {
        side: Side,
        player_id: Uuid,
        value: String,
    },

    #[error("Score {score} for the {side} side is above the maximum of {max}")]
    ScoreTooHigh { side: Side, score: u32, max: u32 },

    #[error("Goals attributed to the {side} side add up to {submitted}, but the score is {expected}")]
    ScoreMismatch {
        side: Side,
        expected: u32,
        submitted: u64,
    },
}

/// Live totals shown while goal counts are being entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TallyPreview {
    pub home_total: u64,
    pub away_total: u64,
    pub home_score: u32,
    pub away_score: u32,
    pub home_matches: bool,
    pub away_matches: bool,
}

/// Sums a goal map leniently for display
pub fn running_total(goals: &GoalMap) -> u64 {
    goals.values().map(|count| u64::from(count.lenient())).sum()
}

/// Computes the running totals of both sides against the pending score
pub fn preview_tally(pending: &PendingMatch, home: &GoalMap, away: &GoalMap) -> TallyPreview {
    let home_total = running_total(home);
    let away_total = running_total(away);

    TallyPreview {
        home_total,
        away_total,
        home_score: pending.score1,
        away_score: pending.score2,
        home_matches: home_total == u64::from(pending.score1),
        away_matches: away_total == u64::from(pending.score2),
    }
}

/// Checks that every key of each goal map is a player on that side's roster
///
/// A player that no longer exists is treated the same as one on the other
/// team.
pub fn check_roster(
    pending: &PendingMatch,
    home: &GoalMap,
    away: &GoalMap,
    players: &[Player],
) -> Result<(), GoalAttributionError> {
    let team_of: HashMap<Uuid, Uuid> = players.iter().map(|p| (p.id(), p.team_id())).collect();

    for (side, goals, team_id) in [
        (Side::Home, home, pending.team1_id),
        (Side::Away, away, pending.team2_id),
    ] {
        for player_id in goals.keys() {
            if team_of.get(player_id) != Some(&team_id) {
                return Err(GoalAttributionError::NotOnRoster {
                    side,
                    player_id: *player_id,
                });
            }
        }
    }

    Ok(())
}

/// Validates both goal maps against the score and flattens them
///
/// Neither score may exceed [`MAX_SCORE`]. Every value must be a
/// non-negative integer; nothing is coerced. The home map must add up to
/// `score1` and the away map to `score2`. When both sides are off, the home
/// side is reported.
///
/// # Returns
/// * `Ok(Vec<Uuid>)` - One player id per goal
/// * `Err(GoalAttributionError)` - The first problem found
///
/// # Example
/// ```
/// use league_api::domain::league::goal_attribution::{
///     validate_and_build_goal_list, GoalMap, PendingMatch,
/// };
/// use uuid::Uuid;
///
/// let (a1, b1) = (Uuid::new_v4(), Uuid::new_v4());
/// let pending = PendingMatch {
///     team1_id: Uuid::new_v4(),
///     team2_id: Uuid::new_v4(),
///     score1: 2,
///     score2: 1,
/// };
/// let home = GoalMap::from([(a1, 2u32.into())]);
/// let away = GoalMap::from([(b1, 1u32.into())]);
///
/// let goals = validate_and_build_goal_list(&pending, &home, &away).unwrap();
/// assert_eq!(goals.len(), 3);
/// ```
pub fn validate_and_build_goal_list(
    pending: &PendingMatch,
    home: &GoalMap,
    away: &GoalMap,
) -> Result<Vec<Uuid>, GoalAttributionError> {
    ensure_score_in_range(Side::Home, pending.score1)?;
    ensure_score_in_range(Side::Away, pending.score2)?;

    let home_counts = strict_counts(Side::Home, home)?;
    let away_counts = strict_counts(Side::Away, away)?;

    ensure_total(Side::Home, &home_counts, pending.score1)?;
    ensure_total(Side::Away, &away_counts, pending.score2)?;

    Ok(home_counts
        .into_iter()
        .chain(away_counts)
        .flat_map(|(player_id, count)| iter::repeat(player_id).take(count as usize))
        .collect())
}

fn strict_counts(side: Side, goals: &GoalMap) -> Result<Vec<(Uuid, u32)>, GoalAttributionError> {
    goals
        .iter()
        .map(|(player_id, count)| {
            count
                .strict()
                .map(|n| (*player_id, n))
                .ok_or_else(|| GoalAttributionError::InvalidGoalCount {
                    side,
                    player_id: *player_id,
                    value: count.raw(),
                })
        })
        .collect()
}

fn ensure_score_in_range(side: Side, score: u32) -> Result<(), GoalAttributionError> {
    if score > MAX_SCORE {
        return Err(GoalAttributionError::ScoreTooHigh {
            side,
            score,
            max: MAX_SCORE,
        });
    }
    Ok(())
}

fn ensure_total(side: Side, counts: &[(Uuid, u32)], expected: u32) -> Result<(), GoalAttributionError> {
    let submitted: u64 = counts.iter().map(|(_, n)| u64::from(*n)).sum();
    if submitted != u64::from(expected) {
        return Err(GoalAttributionError::ScoreMismatch {
            side,
            expected,
            submitted,
        });
    }
    Ok(())
}

/// Mirrors how a form field is read: optional sign, then digits, rest ignored
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value: i64 = rest[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}
