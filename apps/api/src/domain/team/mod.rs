// Team domain module
// Contains the team entity and its name value object

#![allow(clippy::module_inception)]

pub mod team;
pub mod value_objects;

// Re-export main types for convenience
pub use team::Team;
pub use value_objects::TeamName;
