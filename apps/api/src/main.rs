use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use league_api::api::{self, AppState};
use league_api::config::{AppConfig, StorageConfig};
use league_api::domain::repositories::LeagueRepository;
use league_api::infrastructure::repositories::{InMemoryLeagueRepository, JsonFileLeagueRepository};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    // Open storage
    let repo: Arc<dyn LeagueRepository> = match &config.storage {
        StorageConfig::File(path) => {
            tracing::info!(path = %path.display(), "Opening league data file...");
            match JsonFileLeagueRepository::open(path.clone()).await {
                Ok(repo) => Arc::new(repo),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to load league data");
                    std::process::exit(1);
                }
            }
        }
        StorageConfig::Memory => {
            tracing::warn!("Using in-memory storage, data will not survive a restart");
            Arc::new(InMemoryLeagueRepository::new())
        }
    };

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = api::router(AppState::new(repo))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    tracing::info!("Server listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
