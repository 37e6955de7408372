//! Screen-shaped reports assembled from engine output.
//!
//! Each report is plain serializable data. Situations that have nothing to
//! show (no tournament selected, no finished matches) are explicit outcome
//! variants rather than errors.

pub mod club;
pub mod dashboard;
pub mod export;
pub mod player;
pub mod scorers;
pub mod statistics;
pub mod tournament;

pub use club::{club_profile, ClubMatchLine, ClubProfile, SquadMember, SquadSummary};
pub use dashboard::{summarize, DashboardSummary};
pub use export::{write_csv, write_report_csv, CsvTable, ExportError};
pub use player::{player_profile, MatchHistoryEntry, PlayerProfile};
pub use scorers::{scorer_table, ScorersReport};
pub use statistics::{player_statistics, StatisticsReport};
pub use tournament::{
    standings_table, tournament_profile, ClubCard, MatchSummary, RoundGroup, StandingsOutcome,
    TournamentProfile,
};

use crate::domain::{ClubId, PlayerId, Snapshot, TournamentId};
use crate::engine::{rank_leaderboard, Tally};
use serde::Serialize;

/// Label shown for a club reference that does not resolve.
pub const UNKNOWN_CLUB_LABEL: &str = "Unknown club";

/// Report selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Dashboard,
    Standings,
    Scorers,
    Statistics,
}

/// Ranked leaderboard entry (top scorers, top assist providers).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow {
    /// 1-based position.
    pub rank: usize,
    /// `None` for events whose player did not resolve.
    pub player_id: Option<PlayerId>,
    pub name: String,
    pub club: Option<String>,
    pub count: u32,
}

/// Rank `tallies` by count and keep at most `limit` rows.
pub(crate) fn leaderboard_rows(mut tallies: Vec<Tally>, limit: Option<usize>) -> Vec<LeaderboardRow> {
    rank_leaderboard(&mut tallies);
    tallies
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .enumerate()
        .map(|(index, tally)| LeaderboardRow {
            rank: index + 1,
            player_id: tally.player_id,
            name: tally.name,
            club: tally.club,
            count: tally.count,
        })
        .collect()
}

/// Club name for display, falling back to [`UNKNOWN_CLUB_LABEL`] for unset
/// and dangling references.
pub(crate) fn club_label(snapshot: &Snapshot, club: Option<ClubId>) -> String {
    match (club, snapshot.club_name(club)) {
        (_, Some(name)) => name.to_string(),
        (Some(club), None) => {
            tracing::warn!(club_id = %club, "match references a missing club");
            UNKNOWN_CLUB_LABEL.to_string()
        }
        (None, None) => UNKNOWN_CLUB_LABEL.to_string(),
    }
}

/// One rendered report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "report", content = "data", rename_all = "camelCase")]
pub enum Report {
    Dashboard(DashboardSummary),
    Standings(StandingsOutcome),
    Scorers(ScorersReport),
    Statistics(StatisticsReport),
}

impl Report {
    pub fn build(kind: ReportKind, snapshot: &Snapshot, tournament: Option<TournamentId>) -> Self {
        match kind {
            ReportKind::Dashboard => Report::Dashboard(summarize(snapshot)),
            ReportKind::Standings => Report::Standings(standings_table(snapshot, tournament)),
            ReportKind::Scorers => Report::Scorers(scorer_table(snapshot, tournament)),
            ReportKind::Statistics => Report::Statistics(player_statistics(snapshot, tournament)),
        }
    }

    /// SHA-256 of the report's JSON encoding, hex-encoded.
    ///
    /// Reports contain no maps, so the encoding is canonical and equal
    /// snapshots always produce equal fingerprints.
    pub fn fingerprint(&self) -> Result<String, serde_json::Error> {
        use sha2::{Digest, Sha256};

        let bytes = serde_json::to_vec(self)?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        Ok(hex::encode(hasher.finalize()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ContributorKey;

    fn tally(id: i64, count: u32) -> Tally {
        Tally {
            key: ContributorKey::Player(PlayerId::new(id)),
            player_id: Some(PlayerId::new(id)),
            name: format!("P{}", id),
            club: None,
            count,
        }
    }

    #[test]
    fn test_leaderboard_rows_rank_and_limit() {
        let rows = leaderboard_rows(vec![tally(1, 1), tally(2, 3), tally(3, 1), tally(4, 2)], Some(3));
        let ranked: Vec<_> = rows.iter().map(|r| (r.rank, r.name.as_str(), r.count)).collect();
        assert_eq!(ranked, vec![(1, "P2", 3), (2, "P4", 2), (3, "P1", 1)]);
    }

    #[test]
    fn test_club_label_falls_back_for_unset_and_missing() {
        let snapshot = Snapshot::default();
        assert_eq!(club_label(&snapshot, None), UNKNOWN_CLUB_LABEL);
        assert_eq!(club_label(&snapshot, Some(ClubId::new(9))), UNKNOWN_CLUB_LABEL);
    }

    #[test]
    fn test_fingerprint_is_stable_hex() {
        let report = Report::Dashboard(DashboardSummary::default());
        let a = report.fingerprint().unwrap();
        let b = report.clone().fingerprint().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_report_json_shape() {
        let report = Report::Scorers(ScorersReport::NoTournamentSelected);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["report"], "scorers");
        assert_eq!(json["data"]["status"], "noTournamentSelected");
    }
}
