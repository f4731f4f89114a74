use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::log_events;
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::league::{self, MatchSubmission, MatchSummary, TallyPreview};
use crate::domain::matches::Match;

/// Response from match creation
#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub id: Uuid,
    pub team1_id: Uuid,
    pub team2_id: Uuid,
    pub score1: u32,
    pub score2: u32,
    pub goals: Vec<Uuid>,
    pub played_at: DateTime<Utc>,
}

impl From<&Match> for MatchResponse {
    fn from(m: &Match) -> Self {
        Self {
            id: m.id(),
            team1_id: m.team1_id(),
            team2_id: m.team2_id(),
            score1: m.score1(),
            score2: m.score2(),
            goals: m.goals().to_vec(),
            played_at: m.played_at(),
        }
    }
}

/// Record a match result
///
/// POST /api/matches
///
/// The goal maps must account for every goal of the score; otherwise the
/// match is rejected with 400 and nothing is stored.
pub async fn create_match(
    State(state): State<AppState>,
    Json(req): Json<MatchSubmission>,
) -> Result<(StatusCode, Json<MatchResponse>), ApiError> {
    let (game, event) = state.repo.commit_match(&req).await.map_err(|e| {
        if e.is_validation() {
            tracing::warn!(
                team1_id = %req.team1_id,
                team2_id = %req.team2_id,
                error = %e,
                "Match rejected"
            );
        }
        ApiError::from(e)
    })?;
    log_events([&event]);

    Ok((StatusCode::CREATED, Json(MatchResponse::from(&game))))
}

/// Live goal totals for a result being entered
///
/// POST /api/matches/tally
///
/// Never fails on odd values: anything that is not a non-negative number
/// counts as zero.
pub async fn preview_tally(Json(req): Json<MatchSubmission>) -> Json<TallyPreview> {
    Json(league::preview_tally(
        &req.pending(),
        &req.home_goals,
        &req.away_goals,
    ))
}

/// List recorded matches whose teams both still exist
///
/// GET /api/matches
pub async fn list_matches(
    State(state): State<AppState>,
) -> Result<Json<Vec<MatchSummary>>, ApiError> {
    let league = state.repo.snapshot().await?;

    Ok(Json(league.match_history()))
}

/// Delete a match
///
/// DELETE /api/matches/:id
pub async fn delete_match(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    match state.repo.delete_match(id).await? {
        Some(event) => log_events([&event]),
        None => tracing::debug!(match_id = %id, "Delete of unknown match ignored"),
    }

    Ok(StatusCode::NO_CONTENT)
}
