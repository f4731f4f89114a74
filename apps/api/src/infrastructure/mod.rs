// Infrastructure layer module
// Contains storage adapters for the domain repository ports
// Follows Hexagonal Architecture

pub mod repositories;
