//! Per-player statistics table for one tournament.

use crate::domain::{Snapshot, TournamentId};
use crate::engine::{aggregate_player, finished_matches, rank_player_stats, PlayerResolver, PlayerTableRow};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "rows", rename_all = "camelCase")]
pub enum StatisticsReport {
    NoTournamentSelected,
    NoFinishedMatches,
    /// The tournament has no clubs, so no player can be listed.
    NoClubs,
    /// Finished matches exist but no tournament player has an event.
    NoContributors,
    Table(Vec<PlayerTableRow>),
}

/// Statistics of players registered with the tournament's clubs.
///
/// Only players with at least one attributed event are listed. Events are
/// resolved against every player of the snapshot, so a name shared with a
/// player outside the tournament goes to whichever record comes first.
pub fn player_statistics(snapshot: &Snapshot, tournament: Option<TournamentId>) -> StatisticsReport {
    let Some(tournament) = tournament else {
        return StatisticsReport::NoTournamentSelected;
    };

    let matches = finished_matches(&snapshot.matches, Some(tournament));
    if matches.is_empty() {
        return StatisticsReport::NoFinishedMatches;
    }

    let clubs = snapshot.clubs_in(tournament);
    if clubs.is_empty() {
        return StatisticsReport::NoClubs;
    }

    let resolver = PlayerResolver::new(&snapshot.players);

    let mut rows: Vec<PlayerTableRow> = snapshot
        .players
        .iter()
        .filter_map(|player| {
            let club = clubs.iter().find(|c| player.belongs_to(c.id))?;
            let stats = aggregate_player(player, &matches, &resolver);
            stats.is_active().then(|| PlayerTableRow {
                rank: 0,
                player_id: player.id,
                name: player.name.clone(),
                club: Some(club.name.clone()),
                position: player.position.clone(),
                stats,
            })
        })
        .collect();

    if rows.is_empty() {
        return StatisticsReport::NoContributors;
    }

    rank_player_stats(&mut rows);
    tracing::debug!(tournament = %tournament, rows = rows.len(), "built player statistics");
    StatisticsReport::Table(rows)
}
