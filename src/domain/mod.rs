//! Domain model for league administration data.
//!
//! This module provides:
//! - Typed identifiers that tolerate the loose id encodings found in stored records
//! - Entity records: Tournament, Club, Player, Coach, Fixture (match), Round
//! - The closed EventKind classification for match event logs
//! - The immutable Snapshot handed to the statistics engine
//! - Stable ordering keys for standings, leaderboards and player tables

pub mod club;
pub mod coach;
pub mod dates;
pub mod event;
pub mod fixture;
pub mod ordering;
pub mod player;
pub mod primitives;
pub mod round;
pub mod snapshot;
pub mod tournament;

pub use club::Club;
pub use coach::Coach;
pub use event::{EventKind, MatchEvent};
pub use fixture::{Fixture, MatchOutcome, MatchStatus};
pub use ordering::{rank_descending, LeaderboardKey, PlayerStatsKey, Ranked, StandingsKey};
pub use player::Player;
pub use primitives::{ClubId, CoachId, MatchId, PlayerId, RoundId, TournamentId, UserId};
pub use round::{Round, RoundFixture};
pub use snapshot::{Owned, Snapshot};
pub use tournament::Tournament;
