// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_league_repository;
pub mod json_file_league_repository;

pub use in_memory_league_repository::InMemoryLeagueRepository;
pub use json_file_league_repository::JsonFileLeagueRepository;
