//! League API Library
//!
//! This library provides the core functionality for the league tracker API,
//! including the standings and scorer computations, goal attribution,
//! storage adapters and the HTTP layer.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
