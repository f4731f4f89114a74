use std::sync::Arc;

use crate::domain::repositories::LeagueRepository;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn LeagueRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn LeagueRepository>) -> Self {
        Self { repo }
    }
}
