//! Round scheduling helpers.
//!
//! These build new data for the caller to persist; nothing here reads or
//! changes stored matches.

use crate::domain::{Club, ClubId, Round, RoundFixture, Snapshot, TournamentId, UserId};
use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

/// Hour of day (local) at which materialized matches kick off.
pub const KICKOFF_HOUR: u32 = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("at least 2 clubs are needed to pair a round, got {0}")]
    NotEnoughClubs(usize),
}

/// A match record not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDraft {
    pub tournament_id: TournamentId,
    #[serde(rename = "homeTeamId")]
    pub home_club_id: Option<ClubId>,
    #[serde(rename = "awayTeamId")]
    pub away_club_id: Option<ClubId>,
    pub round: u32,
    pub date: Option<NaiveDateTime>,
    pub user_id: UserId,
}

/// Number for the next round of `tournament`: highest existing number + 1, or 1.
pub fn next_round_number(snapshot: &Snapshot, tournament: TournamentId) -> u32 {
    snapshot
        .rounds_in(tournament)
        .iter()
        .map(|r| r.number)
        .max()
        .map_or(1, |n| n + 1)
}

/// Pair clubs in order: first vs second, third vs fourth, and so on.
/// With an odd count the last club sits the round out.
pub fn pair_clubs(clubs: &[&Club]) -> Result<Vec<RoundFixture>, ScheduleError> {
    if clubs.len() < 2 {
        return Err(ScheduleError::NotEnoughClubs(clubs.len()));
    }

    Ok(clubs
        .chunks_exact(2)
        .map(|pair| RoundFixture {
            home_club_id: Some(pair[0].id),
            away_club_id: Some(pair[1].id),
        })
        .collect())
}

/// One match draft per fixture of `round`, kicking off at
/// [`KICKOFF_HOUR`] on the round's date.
pub fn materialize_round(round: &Round) -> Vec<MatchDraft> {
    let kickoff = round.date.and_then(|d| d.and_hms_opt(KICKOFF_HOUR, 0, 0));

    round
        .matches
        .iter()
        .map(|fixture| MatchDraft {
            tournament_id: round.tournament_id,
            home_club_id: fixture.home_club_id,
            away_club_id: fixture.away_club_id,
            round: round.number,
            date: kickoff,
            user_id: round.user_id.clone(),
        })
        .collect()
}
