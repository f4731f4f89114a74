// Match domain module
// `match` is a keyword, so the entity lives in `game`

pub mod game;

pub use game::{Match, Outcome};
