//! Round record: a dated batch of fixtures for one tournament.

use crate::domain::dates::optional_date;
use crate::domain::primitives::optional_id;
use crate::domain::{ClubId, RoundId, TournamentId, UserId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A pairing inside a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundFixture {
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
}

/// A round. Materializing it creates match records once; later edits to the
/// round are not propagated to those matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: RoundId,
    #[serde(alias = "tournament_id")]
    pub tournament_id: TournamentId,
    pub number: u32,
    #[serde(default, deserialize_with = "optional_date")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub matches: Vec<RoundFixture>,
    #[serde(alias = "user_id")]
    pub user_id: UserId,
}
