//! Match record and derived status.

use crate::domain::dates::optional_datetime;
use crate::domain::primitives::optional_id;
use crate::domain::{ClubId, MatchEvent, MatchId, TournamentId, UserId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Match status. Never stored independently: it is derived from the scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Finished,
}

/// Result of a finished match from one club's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    pub fn from_scores(goals_for: u32, goals_against: u32) -> Self {
        match goals_for.cmp(&goals_against) {
            Ordering::Greater => MatchOutcome::Win,
            Ordering::Equal => MatchOutcome::Draw,
            Ordering::Less => MatchOutcome::Loss,
        }
    }

    /// Points awarded for this outcome.
    pub fn points(&self) -> u32 {
        match self {
            MatchOutcome::Win => 3,
            MatchOutcome::Draw => 1,
            MatchOutcome::Loss => 0,
        }
    }
}

/// A match between two clubs.
///
/// A record with only one score set is a caller contract violation; it is
/// treated as scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub id: MatchId,
    #[serde(default, alias = "tournament_id", deserialize_with = "optional_id")]
    pub tournament_id: Option<TournamentId>,
    /// `None` when the form was saved without selecting a club.
    #[serde(
        default,
        rename = "homeTeamId",
        alias = "home_team_id",
        deserialize_with = "optional_id"
    )]
    pub home_club_id: Option<ClubId>,
    #[serde(
        default,
        rename = "awayTeamId",
        alias = "away_team_id",
        deserialize_with = "optional_id"
    )]
    pub away_club_id: Option<ClubId>,
    #[serde(default)]
    pub round: Option<u32>,
    #[serde(default, deserialize_with = "optional_datetime")]
    pub date: Option<NaiveDateTime>,
    #[serde(default, alias = "home_score", skip_serializing_if = "Option::is_none")]
    pub home_score: Option<u32>,
    #[serde(default, alias = "away_score", skip_serializing_if = "Option::is_none")]
    pub away_score: Option<u32>,
    /// Event log in recorded order.
    #[serde(default)]
    pub events: Vec<MatchEvent>,
    #[serde(alias = "user_id")]
    pub user_id: UserId,
}

impl Fixture {
    pub fn status(&self) -> MatchStatus {
        if self.final_score().is_some() {
            MatchStatus::Finished
        } else {
            MatchStatus::Scheduled
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status() == MatchStatus::Finished
    }

    /// `(home, away)` when both scores are set.
    pub fn final_score(&self) -> Option<(u32, u32)> {
        Some((self.home_score?, self.away_score?))
    }

    pub fn involves(&self, club: ClubId) -> bool {
        self.home_club_id == Some(club) || self.away_club_id == Some(club)
    }

    pub fn is_in(&self, tournament: TournamentId) -> bool {
        self.tournament_id == Some(tournament)
    }

    /// `(goals_for, goals_against)` for `club`, if it played in this finished
    /// match. When a club plays itself the home side is used.
    pub fn score_for(&self, club: ClubId) -> Option<(u32, u32)> {
        let (home, away) = self.final_score()?;
        if self.home_club_id == Some(club) {
            Some((home, away))
        } else if self.away_club_id == Some(club) {
            Some((away, home))
        } else {
            None
        }
    }

    pub fn outcome_for(&self, club: ClubId) -> Option<MatchOutcome> {
        self.score_for(club)
            .map(|(gf, ga)| MatchOutcome::from_scores(gf, ga))
    }
}
