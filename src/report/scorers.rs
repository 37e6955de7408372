//! Tournament top-scorer table.

use super::{leaderboard_rows, LeaderboardRow};
use crate::domain::{EventKind, Snapshot, TournamentId};
use crate::engine::{finished_matches, tally_events, PlayerResolver, UnresolvedPolicy};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "rows", rename_all = "camelCase")]
pub enum ScorersReport {
    NoTournamentSelected,
    NoFinishedMatches,
    /// Finished matches exist but none recorded a goal.
    NoContributors,
    Table(Vec<LeaderboardRow>),
}

/// Goal leaderboard for one tournament.
///
/// Goals whose player does not resolve are still listed under the event's own
/// player and team labels.
pub fn scorer_table(snapshot: &Snapshot, tournament: Option<TournamentId>) -> ScorersReport {
    let Some(tournament) = tournament else {
        return ScorersReport::NoTournamentSelected;
    };

    let matches = finished_matches(&snapshot.matches, Some(tournament));
    if matches.is_empty() {
        return ScorersReport::NoFinishedMatches;
    }

    let resolver = PlayerResolver::new(&snapshot.players);
    let tallies = tally_events(
        &matches,
        &EventKind::Goal,
        &resolver,
        snapshot,
        UnresolvedPolicy::FallbackLabel,
    );
    if tallies.is_empty() {
        return ScorersReport::NoContributors;
    }
    ScorersReport::Table(leaderboard_rows(tallies, None))
}
