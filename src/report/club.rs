//! Club profile.

use super::{club_label, leaderboard_rows, LeaderboardRow};
use crate::domain::{ClubId, EventKind, MatchId, MatchOutcome, PlayerId, Snapshot};
use crate::engine::{
    aggregate_club, aggregate_player, finished_matches, tally_events, ClubStats, PlayerResolver,
    PlayerStats, UnresolvedPolicy,
};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashSet;

/// Length of the profile's scorer and assist lists.
pub const CLUB_TOP_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadSummary {
    pub players: usize,
    /// Mean stored age rounded to the nearest year; a missing age counts as 0.
    pub average_age: u32,
    /// Players whose nationality differs from the club's country.
    pub foreign_players: usize,
}

impl SquadSummary {
    fn new(ages: &[Option<u32>], foreign_players: usize) -> Self {
        let players = ages.len();
        let average_age = if players == 0 {
            0
        } else {
            let total: u64 = ages.iter().map(|a| u64::from(a.unwrap_or(0))).sum();
            let n = players as u64;
            // Round half up.
            ((2 * total + n) / (2 * n)) as u32
        };
        Self {
            players,
            average_age,
            foreign_players,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadMember {
    pub player_id: PlayerId,
    pub name: String,
    pub position: String,
    pub number: Option<u32>,
    pub age: Option<u32>,
    pub nationality: String,
    pub stats: PlayerStats,
}

/// A finished match from the club's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubMatchLine {
    pub match_id: MatchId,
    pub date: Option<NaiveDateTime>,
    pub home_club: String,
    pub away_club: String,
    pub goals_for: u32,
    pub goals_against: u32,
    pub outcome: MatchOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubProfile {
    pub club_id: ClubId,
    pub name: String,
    pub country: String,
    /// Name of the tournament the club is entered in, if it resolves.
    pub tournament: Option<String>,
    pub stats: ClubStats,
    pub goal_difference: i64,
    pub points: u32,
    pub squad: SquadSummary,
    pub members: Vec<SquadMember>,
    pub matches: Vec<ClubMatchLine>,
    pub top_scorers: Vec<LeaderboardRow>,
    pub top_assists: Vec<LeaderboardRow>,
}

/// Profile of one club over all of the user's finished matches involving it,
/// whatever tournament they belong to. `None` if the club does not exist.
pub fn club_profile(snapshot: &Snapshot, id: ClubId) -> Option<ClubProfile> {
    let club = snapshot.club(id)?;
    let squad = snapshot.players_of(id);
    let finished: Vec<_> = finished_matches(&snapshot.matches, None)
        .into_iter()
        .filter(|m| m.involves(id))
        .collect();
    let resolver = PlayerResolver::new(&snapshot.players);

    let stats = aggregate_club(id, &finished);

    let ages: Vec<Option<u32>> = squad.iter().map(|p| p.age).collect();
    let foreign = squad.iter().filter(|p| p.nationality != club.country).count();

    let members = squad
        .iter()
        .map(|p| SquadMember {
            player_id: p.id,
            name: p.name.clone(),
            position: p.position.clone(),
            number: p.number,
            age: p.age,
            nationality: p.nationality.clone(),
            stats: aggregate_player(p, &finished, &resolver),
        })
        .collect();

    let matches = finished
        .iter()
        .filter_map(|m| {
            let (goals_for, goals_against) = m.score_for(id)?;
            Some(ClubMatchLine {
                match_id: m.id,
                date: m.date,
                home_club: club_label(snapshot, m.home_club_id),
                away_club: club_label(snapshot, m.away_club_id),
                goals_for,
                goals_against,
                outcome: MatchOutcome::from_scores(goals_for, goals_against),
            })
        })
        .collect();

    let members_ids: HashSet<PlayerId> = squad.iter().map(|p| p.id).collect();
    let top = |kind: EventKind| {
        let mut tallies =
            tally_events(&finished, &kind, &resolver, snapshot, UnresolvedPolicy::Exclude);
        tallies.retain(|t| t.player_id.map_or(false, |pid| members_ids.contains(&pid)));
        leaderboard_rows(tallies, Some(CLUB_TOP_LIMIT))
    };

    let tournament = club
        .tournament_id
        .and_then(|t| snapshot.tournament(t))
        .map(|t| t.name.clone());

    Some(ClubProfile {
        club_id: club.id,
        name: club.name.clone(),
        country: club.country.clone(),
        tournament,
        stats,
        goal_difference: stats.goal_difference(),
        points: stats.points(),
        squad: SquadSummary::new(&ages, foreign),
        members,
        matches,
        top_scorers: top(EventKind::Goal),
        top_assists: top(EventKind::Assist),
    })
}
