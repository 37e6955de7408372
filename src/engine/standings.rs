//! League tables: standings, leaderboards and the player statistics table.

use super::aggregator::{aggregate_club, ClubStats, PlayerStats, Tally};
use crate::domain::{
    rank_descending, Club, ClubId, Fixture, LeaderboardKey, PlayerId, PlayerStatsKey, Ranked,
    StandingsKey,
};
use serde::Serialize;

/// Number of bottom places flagged for relegation.
///
/// Fixed regardless of league size, so in small leagues the zone overlaps the
/// qualification places; those take precedence.
pub const RELEGATION_ZONE: usize = 2;

/// Highest 0-based index still flagged as qualified.
const LAST_QUALIFIED_INDEX: usize = 3;

/// Presentational marker derived from a standings position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionBadge {
    Champion,
    Qualified,
    Relegation,
}

impl PositionBadge {
    /// Badge for the 0-based `index` in a table of `len` rows.
    pub fn for_rank(index: usize, len: usize) -> Option<Self> {
        if index == 0 {
            Some(PositionBadge::Champion)
        } else if index <= LAST_QUALIFIED_INDEX {
            Some(PositionBadge::Qualified)
        } else if index + RELEGATION_ZONE >= len {
            Some(PositionBadge::Relegation)
        } else {
            None
        }
    }
}

/// One row of a tournament's standings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
    /// 1-based position after ranking.
    pub position: usize,
    pub club_id: ClubId,
    pub club_name: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
    pub badge: Option<PositionBadge>,
}

impl StandingRow {
    fn new(club: &Club, stats: ClubStats) -> Self {
        Self {
            position: 0,
            club_id: club.id,
            club_name: club.name.clone(),
            played: stats.played,
            wins: stats.wins,
            draws: stats.draws,
            losses: stats.losses,
            goals_for: stats.goals_for,
            goals_against: stats.goals_against,
            goal_difference: stats.goal_difference(),
            points: stats.points(),
            badge: None,
        }
    }
}

impl Ranked for StandingRow {
    type Key = StandingsKey;

    fn ranking_key(&self) -> StandingsKey {
        StandingsKey {
            points: self.points,
            goal_difference: self.goal_difference,
            goals_for: self.goals_for,
        }
    }
}

impl Ranked for Tally {
    type Key = LeaderboardKey;

    fn ranking_key(&self) -> LeaderboardKey {
        LeaderboardKey { count: self.count }
    }
}

/// Order standings by points, then goal difference, then goals for, and
/// assign positions and badges from the final order.
pub fn rank_standings(rows: &mut [StandingRow]) {
    rank_descending(rows);
    let len = rows.len();
    for (index, row) in rows.iter_mut().enumerate() {
        row.position = index + 1;
        row.badge = PositionBadge::for_rank(index, len);
    }
}

/// Order leaderboard tallies by count only.
pub fn rank_leaderboard(tallies: &mut [Tally]) {
    rank_descending(tallies);
}

/// Standings for `clubs` over `matches`: one row per club, in input order
/// before ranking, so equal rows keep the clubs' stored order.
pub fn build_standings(clubs: &[&Club], matches: &[&Fixture]) -> Vec<StandingRow> {
    let mut rows: Vec<StandingRow> = clubs
        .iter()
        .map(|club| StandingRow::new(club, aggregate_club(club.id, matches)))
        .collect();
    rank_standings(&mut rows);

    tracing::debug!(clubs = rows.len(), matches = matches.len(), "built standings");
    rows
}

/// Row of the player statistics table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerTableRow {
    /// 1-based position after ranking.
    pub rank: usize,
    pub player_id: PlayerId,
    pub name: String,
    /// Club name, `None` when the player's club does not resolve.
    pub club: Option<String>,
    pub position: String,
    #[serde(flatten)]
    pub stats: PlayerStats,
}

impl Ranked for PlayerTableRow {
    type Key = PlayerStatsKey;

    fn ranking_key(&self) -> PlayerStatsKey {
        PlayerStatsKey {
            goals: self.stats.goals,
            assists: self.stats.assists,
            matches: self.stats.matches,
        }
    }
}

/// Order by goals, then assists, then matches played; assign 1-based ranks.
pub fn rank_player_stats(rows: &mut [PlayerTableRow]) {
    rank_descending(rows);
    for (index, row) in rows.iter_mut().enumerate() {
        row.rank = index + 1;
    }
}
