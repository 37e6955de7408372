//! Pure computation engine(s) for league statistics.
//!
//! Every function here takes borrowed snapshot data and returns owned output.
//! Nothing in this module performs I/O or keeps state between calls.

pub mod aggregator;
pub mod interpreter;
pub mod resolver;
pub mod standings;

pub use aggregator::{
    aggregate_club, aggregate_player, count_events, finished_matches, tally_events, ClubStats,
    ContributorKey, PlayerStats, Tally, UnresolvedPolicy,
};
pub use interpreter::{describe_events, interpret, played_in, Attribution, EventLine, PlayerEvent};
pub use resolver::{PlayerResolver, Resolution};
pub use standings::{
    build_standings, rank_leaderboard, rank_player_stats, rank_standings, PlayerTableRow,
    PositionBadge, StandingRow, RELEGATION_ZONE,
};
