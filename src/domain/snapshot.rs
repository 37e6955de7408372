//! Read-only bundle of entity collections handed to the engine per call.

use crate::domain::{
    Club, ClubId, Coach, Fixture, Player, PlayerId, Round, Tournament, TournamentId, UserId,
};
use serde::{Deserialize, Serialize};

/// Records that belong to exactly one user.
pub trait Owned {
    fn owner(&self) -> &UserId;
}

macro_rules! impl_owned {
    ($($ty:ty),* $(,)?) => {
        $(impl Owned for $ty {
            fn owner(&self) -> &UserId {
                &self.user_id
            }
        })*
    };
}

impl_owned!(Tournament, Club, Player, Coach, Fixture, Round);

/// Immutable snapshot of one user's data.
///
/// Built by the persistence collaborator and passed by reference into every
/// engine call. Collections keep their stored order, which is the encounter
/// order all stable rankings fall back to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub tournaments: Vec<Tournament>,
    #[serde(default)]
    pub clubs: Vec<Club>,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub coaches: Vec<Coach>,
    #[serde(default)]
    pub matches: Vec<Fixture>,
    #[serde(default)]
    pub rounds: Vec<Round>,
}

fn retain_owned<T: Owned>(items: &mut Vec<T>, user: &UserId) {
    items.retain(|item| item.owner() == user);
}

impl Snapshot {
    /// Drop every record not owned by `user`.
    pub fn scoped_to(mut self, user: &UserId) -> Self {
        retain_owned(&mut self.tournaments, user);
        retain_owned(&mut self.clubs, user);
        retain_owned(&mut self.players, user);
        retain_owned(&mut self.coaches, user);
        retain_owned(&mut self.matches, user);
        retain_owned(&mut self.rounds, user);
        self
    }

    pub fn tournament(&self, id: TournamentId) -> Option<&Tournament> {
        self.tournaments.iter().find(|t| t.id == id)
    }

    pub fn club(&self, id: ClubId) -> Option<&Club> {
        self.clubs.iter().find(|c| c.id == id)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Club name, if the reference resolves.
    pub fn club_name(&self, id: Option<ClubId>) -> Option<&str> {
        id.and_then(|id| self.club(id)).map(|c| c.name.as_str())
    }

    /// Clubs entered in `tournament`, in stored order.
    pub fn clubs_in(&self, tournament: TournamentId) -> Vec<&Club> {
        self.clubs.iter().filter(|c| c.is_in(tournament)).collect()
    }

    /// Players registered with `club`, in stored order.
    pub fn players_of(&self, club: ClubId) -> Vec<&Player> {
        self.players.iter().filter(|p| p.belongs_to(club)).collect()
    }

    /// Every match of `tournament`, finished or not, in stored order.
    pub fn matches_in(&self, tournament: TournamentId) -> Vec<&Fixture> {
        self.matches.iter().filter(|m| m.is_in(tournament)).collect()
    }

    pub fn rounds_in(&self, tournament: TournamentId) -> Vec<&Round> {
        self.rounds
            .iter()
            .filter(|r| r.tournament_id == tournament)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn club(id: i64, user: &str, tournament: Option<i64>) -> Club {
        Club {
            id: ClubId::new(id),
            name: format!("Club {}", id),
            country: "Brasil".to_string(),
            logo: None,
            tournament_id: tournament.map(TournamentId::new),
            user_id: UserId::new(user),
        }
    }

    #[test]
    fn test_scoped_to_drops_other_users() {
        let snapshot = Snapshot {
            clubs: vec![club(1, "a", None), club(2, "b", None), club(3, "a", None)],
            ..Default::default()
        };
        let scoped = snapshot.scoped_to(&UserId::new("a"));
        let ids: Vec<i64> = scoped.clubs.iter().map(|c| c.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_clubs_in_keeps_stored_order() {
        let snapshot = Snapshot {
            clubs: vec![
                club(3, "a", Some(1)),
                club(1, "a", Some(2)),
                club(2, "a", Some(1)),
            ],
            ..Default::default()
        };
        let ids: Vec<i64> = snapshot
            .clubs_in(TournamentId::new(1))
            .iter()
            .map(|c| c.id.as_i64())
            .collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_dangling_club_name_is_none() {
        let snapshot = Snapshot::default();
        assert_eq!(snapshot.club_name(Some(ClubId::new(99))), None);
        assert_eq!(snapshot.club_name(None), None);
    }
}
