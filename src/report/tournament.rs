//! Tournament standings and the tournament profile.

use super::{club_label, leaderboard_rows, LeaderboardRow};
use crate::domain::{
    ClubId, EventKind, Fixture, MatchId, MatchStatus, Snapshot, TournamentId,
};
use crate::engine::{
    aggregate_club, build_standings, finished_matches, tally_events, PlayerResolver, StandingRow,
    UnresolvedPolicy,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeMap;

/// Length of the profile's scorer and assist lists.
pub const TOURNAMENT_TOP_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "rows", rename_all = "camelCase")]
pub enum StandingsOutcome {
    NoTournamentSelected,
    /// The tournament has no clubs entered.
    NoClubs,
    Table(Vec<StandingRow>),
}

/// Standings of the selected tournament over its finished matches.
pub fn standings_table(snapshot: &Snapshot, tournament: Option<TournamentId>) -> StandingsOutcome {
    let Some(tournament) = tournament else {
        return StandingsOutcome::NoTournamentSelected;
    };

    let clubs = snapshot.clubs_in(tournament);
    if clubs.is_empty() {
        return StandingsOutcome::NoClubs;
    }

    let matches = finished_matches(&snapshot.matches, Some(tournament));
    StandingsOutcome::Table(build_standings(&clubs, &matches))
}

/// A match as listed in the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub match_id: MatchId,
    pub home_club: String,
    pub away_club: String,
    pub status: MatchStatus,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub date: Option<NaiveDateTime>,
}

impl MatchSummary {
    fn new(snapshot: &Snapshot, fixture: &Fixture) -> Self {
        let score = fixture.final_score();
        Self {
            match_id: fixture.id,
            home_club: club_label(snapshot, fixture.home_club_id),
            away_club: club_label(snapshot, fixture.away_club_id),
            status: fixture.status(),
            home_score: score.map(|(home, _)| home),
            away_score: score.map(|(_, away)| away),
            date: fixture.date,
        }
    }
}

/// Matches sharing a round number. `round` is `None` for matches stored
/// without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundGroup {
    pub round: Option<u32>,
    pub matches: Vec<MatchSummary>,
}

/// Club overview inside a tournament profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubCard {
    pub club_id: ClubId,
    pub name: String,
    pub played: u32,
    pub wins: u32,
    pub squad_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentProfile {
    pub tournament_id: TournamentId,
    pub name: String,
    /// Display label of the game variant.
    pub game: String,
    pub start_date: Option<NaiveDate>,
    pub description: String,
    pub standings: StandingsOutcome,
    /// Every match of the tournament grouped by round, ascending.
    pub rounds: Vec<RoundGroup>,
    pub top_scorers: Vec<LeaderboardRow>,
    pub top_assists: Vec<LeaderboardRow>,
    pub clubs: Vec<ClubCard>,
}

/// Group matches by round number, ascending; matches without a round go last.
/// Within a group matches keep their stored order.
fn group_by_round(snapshot: &Snapshot, matches: &[&Fixture]) -> Vec<RoundGroup> {
    let mut numbered: BTreeMap<u32, Vec<MatchSummary>> = BTreeMap::new();
    let mut unnumbered = Vec::new();

    for fixture in matches {
        let summary = MatchSummary::new(snapshot, fixture);
        match fixture.round {
            Some(round) => numbered.entry(round).or_default().push(summary),
            None => unnumbered.push(summary),
        }
    }

    let mut groups: Vec<RoundGroup> = numbered
        .into_iter()
        .map(|(round, matches)| RoundGroup {
            round: Some(round),
            matches,
        })
        .collect();
    if !unnumbered.is_empty() {
        groups.push(RoundGroup {
            round: None,
            matches: unnumbered,
        });
    }
    groups
}

/// Profile of one tournament; `None` if it does not exist.
///
/// Top lists count finished matches only and list resolved players only.
pub fn tournament_profile(snapshot: &Snapshot, id: TournamentId) -> Option<TournamentProfile> {
    let tournament = snapshot.tournament(id)?;
    let clubs = snapshot.clubs_in(id);
    let all_matches = snapshot.matches_in(id);
    let finished = finished_matches(all_matches.iter().copied(), None);
    let resolver = PlayerResolver::new(&snapshot.players);

    let top = |kind: EventKind| {
        let tallies = tally_events(&finished, &kind, &resolver, snapshot, UnresolvedPolicy::Exclude);
        leaderboard_rows(tallies, Some(TOURNAMENT_TOP_LIMIT))
    };

    let cards = clubs
        .iter()
        .map(|club| {
            let stats = aggregate_club(club.id, &finished);
            ClubCard {
                club_id: club.id,
                name: club.name.clone(),
                played: stats.played,
                wins: stats.wins,
                squad_size: snapshot.players_of(club.id).len(),
            }
        })
        .collect();

    Some(TournamentProfile {
        tournament_id: tournament.id,
        name: tournament.name.clone(),
        game: tournament.game_label().to_string(),
        start_date: tournament.start_date,
        description: tournament.description.clone(),
        standings: standings_table(snapshot, Some(id)),
        rounds: group_by_round(snapshot, &all_matches),
        top_scorers: top(EventKind::Goal),
        top_assists: top(EventKind::Assist),
        clubs: cards,
    })
}
