//! In-memory snapshot source for tests.

use super::{SnapshotSource, SourceError};
use crate::domain::{Club, Coach, Fixture, Player, Round, Snapshot, Tournament, UserId};

/// Mock source that serves predefined records, possibly of several users.
#[derive(Debug, Clone, Default)]
pub struct MockSnapshotSource {
    records: Snapshot,
}

impl MockSnapshotSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve every record of `snapshot`.
    pub fn with_snapshot(mut self, snapshot: Snapshot) -> Self {
        self.records = snapshot;
        self
    }

    pub fn with_tournament(mut self, tournament: Tournament) -> Self {
        self.records.tournaments.push(tournament);
        self
    }

    pub fn with_club(mut self, club: Club) -> Self {
        self.records.clubs.push(club);
        self
    }

    pub fn with_clubs(mut self, clubs: Vec<Club>) -> Self {
        self.records.clubs.extend(clubs);
        self
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.records.players.push(player);
        self
    }

    pub fn with_players(mut self, players: Vec<Player>) -> Self {
        self.records.players.extend(players);
        self
    }

    pub fn with_coach(mut self, coach: Coach) -> Self {
        self.records.coaches.push(coach);
        self
    }

    pub fn with_match(mut self, fixture: Fixture) -> Self {
        self.records.matches.push(fixture);
        self
    }

    pub fn with_matches(mut self, matches: Vec<Fixture>) -> Self {
        self.records.matches.extend(matches);
        self
    }

    pub fn with_round(mut self, round: Round) -> Self {
        self.records.rounds.push(round);
        self
    }
}

impl SnapshotSource for MockSnapshotSource {
    fn load(&self, user: &UserId) -> Result<Snapshot, SourceError> {
        Ok(self.records.clone().scoped_to(user))
    }
}
