//! Stable ranking keys for deterministic tables.
//!
//! Every table is ordered descending by its key. Rows whose keys compare
//! equal keep their input order: `slice::sort_by` is a stable sort, and no
//! implicit tie-break (name, id) is ever added on top of the documented keys.

/// Standings key. Ordering: points -> goal difference -> goals for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StandingsKey {
    pub points: u32,
    pub goal_difference: i64,
    pub goals_for: u32,
}

/// Leaderboard key: the single counted event total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LeaderboardKey {
    pub count: u32,
}

/// Player statistics key. Ordering: goals -> assists -> matches played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlayerStatsKey {
    pub goals: u32,
    pub assists: u32,
    pub matches: u32,
}

/// A row that can be ranked by a descending key.
pub trait Ranked {
    type Key: Ord;

    fn ranking_key(&self) -> Self::Key;
}

/// Sort rows descending by their ranking key, keeping equal rows in input order.
pub fn rank_descending<T: Ranked>(rows: &mut [T]) {
    rows.sort_by(|a, b| b.ranking_key().cmp(&a.ranking_key()));
}
