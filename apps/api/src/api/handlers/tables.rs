use axum::{extract::State, Json};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::league::{compute_scorers, compute_standings, ScorerRow, StandingsRow};

/// League table, recomputed from every stored match
///
/// GET /api/standings
pub async fn standings(State(state): State<AppState>) -> Result<Json<Vec<StandingsRow>>, ApiError> {
    let league = state.repo.snapshot().await?;

    Ok(Json(compute_standings(league.teams(), league.matches())))
}

/// Scorer leaderboard
///
/// GET /api/scorers
pub async fn scorers(State(state): State<AppState>) -> Result<Json<Vec<ScorerRow>>, ApiError> {
    let league = state.repo.snapshot().await?;

    Ok(Json(compute_scorers(
        league.players(),
        league.teams(),
        league.matches(),
    )))
}
