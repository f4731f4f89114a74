// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;
pub mod state;

use axum::{
    routing::{delete, get, post},
    Router,
};

pub use state::AppState;

use handlers::{health, matches, tables, teams};

/// Builds the league router with every route attached to the given state
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Team routes
        .route("/api/teams", get(teams::list_teams).post(teams::create_team))
        .route("/api/teams/:id", get(teams::get_team).delete(teams::delete_team))
        .route("/api/teams/:id/players", post(teams::sign_player))
        .route("/api/players", get(teams::list_players))
        // Match routes
        .route("/api/matches", get(matches::list_matches).post(matches::create_match))
        .route("/api/matches/tally", post(matches::preview_tally))
        .route("/api/matches/:id", delete(matches::delete_match))
        // Derived tables
        .route("/api/standings", get(tables::standings))
        .route("/api/scorers", get(tables::scorers))
        .with_state(state)
}
