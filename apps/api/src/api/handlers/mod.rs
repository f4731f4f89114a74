// HTTP handlers, one module per resource

pub mod health;
pub mod matches;
pub mod tables;
pub mod teams;

use crate::domain::events::LeagueEvent;

/// Logs the events produced by a successful mutation
fn log_events<'a>(events: impl IntoIterator<Item = &'a LeagueEvent>) {
    for event in events {
        tracing::info!(event = event.name(), id = %event.subject_id(), "League updated");
    }
}
