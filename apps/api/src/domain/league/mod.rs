// League module
// The league aggregate and the pure computations derived from it:
// goal attribution, the standings table and the scorer leaderboard

#![allow(clippy::module_inception)]

pub mod goal_attribution;
pub mod league;
pub mod scorers;
pub mod standings;

pub use goal_attribution::{
    check_roster, preview_tally, running_total, validate_and_build_goal_list, GoalAttributionError,
    GoalCount, GoalMap, PendingMatch, Side, TallyPreview,
};
pub use league::{League, MatchSubmission, MatchSummary};
pub use scorers::{compute_scorers, ScorerRow};
pub use standings::{compute_standings, StandingsRow};
