use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::log_events;
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::league::League;
use crate::domain::player::Player;
use crate::domain::team::Team;

/// Request body for registering a team
#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
    /// Initial roster; blank names are skipped
    #[serde(default)]
    pub players: Vec<String>,
}

/// Request body for adding a player to a team
#[derive(Debug, Deserialize)]
pub struct SignPlayerRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub id: Uuid,
    pub name: String,
    pub team_id: Uuid,
}

impl From<&Player> for PlayerResponse {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id(),
            name: player.name().to_string(),
            team_id: player.team_id(),
        }
    }
}

/// A team with its roster
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub players: Vec<PlayerResponse>,
}

impl TeamResponse {
    fn build(team: &Team, league: &League) -> Self {
        Self::with_roster(team, league.roster(team.id()))
    }

    fn with_roster<'a>(team: &Team, roster: impl IntoIterator<Item = &'a Player>) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            created_at: team.created_at(),
            players: roster.into_iter().map(PlayerResponse::from).collect(),
        }
    }
}

/// Register a team with its roster
///
/// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
    Json(req): Json<CreateTeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let (team, roster, events) = state.repo.register_team(&req.name, &req.players).await?;
    log_events(&events);

    Ok((
        StatusCode::CREATED,
        Json(TeamResponse::with_roster(&team, &roster)),
    ))
}

/// List all teams in registration order
///
/// GET /api/teams
pub async fn list_teams(State(state): State<AppState>) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let league = state.repo.snapshot().await?;

    let responses = league
        .teams()
        .iter()
        .map(|team| TeamResponse::build(team, &league))
        .collect();

    Ok(Json(responses))
}

/// Get a team by ID
///
/// GET /api/teams/:id
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeamResponse>, ApiError> {
    let league = state.repo.snapshot().await?;
    let team = league
        .find_team(id)
        .ok_or_else(|| ApiError::not_found(format!("Team not found: {}", id)))?;

    Ok(Json(TeamResponse::build(team, &league)))
}

/// Delete a team and its players
///
/// DELETE /api/teams/:id
///
/// Deleting a team that does not exist succeeds without doing anything.
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    match state.repo.delete_team(id).await? {
        Some(event) => log_events([&event]),
        None => tracing::debug!(team_id = %id, "Delete of unknown team ignored"),
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Add a player to a team
///
/// POST /api/teams/:id/players
pub async fn sign_player(
    State(state): State<AppState>,
    Path(team_id): Path<Uuid>,
    Json(req): Json<SignPlayerRequest>,
) -> Result<(StatusCode, Json<PlayerResponse>), ApiError> {
    let (player, event) = state.repo.sign_player(team_id, &req.name).await?;
    log_events([&event]);

    Ok((StatusCode::CREATED, Json(PlayerResponse::from(&player))))
}

/// List all players
///
/// GET /api/players
pub async fn list_players(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlayerResponse>>, ApiError> {
    let league = state.repo.snapshot().await?;

    Ok(Json(league.players().iter().map(PlayerResponse::from).collect()))
}
