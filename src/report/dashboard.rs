//! Dashboard counters.

use crate::domain::{EventKind, Snapshot};
use crate::engine::{count_events, finished_matches};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub tournaments: usize,
    pub clubs: usize,
    pub players: usize,
    pub coaches: usize,
    /// Every match, scheduled or finished.
    pub matches: usize,
    /// Goal events across finished matches.
    pub total_goals: u32,
}

pub fn summarize(snapshot: &Snapshot) -> DashboardSummary {
    let finished = finished_matches(&snapshot.matches, None);
    DashboardSummary {
        tournaments: snapshot.tournaments.len(),
        clubs: snapshot.clubs.len(),
        players: snapshot.players.len(),
        coaches: snapshot.coaches.len(),
        matches: snapshot.matches.len(),
        total_goals: count_events(&finished, &EventKind::Goal),
    }
}
