//! Player profile with match history.

use super::club_label;
use crate::domain::{MatchId, PlayerId, Snapshot};
use crate::engine::{aggregate_player, finished_matches, interpret, PlayerEvent, PlayerResolver, PlayerStats};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;

/// A finished match the player took part in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchHistoryEntry {
    pub match_id: MatchId,
    pub date: Option<NaiveDateTime>,
    pub home_club: String,
    pub away_club: String,
    /// `"home - away"`.
    pub score: String,
    pub events: Vec<PlayerEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub player_id: PlayerId,
    pub name: String,
    pub position: String,
    /// Club name, `None` when the player has no resolvable club.
    pub club: Option<String>,
    pub age: Option<u32>,
    pub birthdate: Option<NaiveDate>,
    pub nationality: String,
    pub height: Option<u32>,
    pub number: Option<u32>,
    pub stats: PlayerStats,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub rating: Option<Decimal>,
    pub history: Vec<MatchHistoryEntry>,
}

/// Profile of one player over all of the user's finished matches.
/// `None` if the player does not exist.
pub fn player_profile(snapshot: &Snapshot, id: PlayerId) -> Option<PlayerProfile> {
    let player = snapshot.player(id)?;
    let resolver = PlayerResolver::new(&snapshot.players);
    let finished = finished_matches(&snapshot.matches, None);

    let stats = aggregate_player(player, &finished, &resolver);

    let history = finished
        .iter()
        .filter_map(|m| {
            let events = interpret(m, player, &resolver);
            if events.is_empty() {
                return None;
            }
            let (home, away) = m.final_score()?;
            Some(MatchHistoryEntry {
                match_id: m.id,
                date: m.date,
                home_club: club_label(snapshot, m.home_club_id),
                away_club: club_label(snapshot, m.away_club_id),
                score: format!("{} - {}", home, away),
                events,
            })
        })
        .collect();

    Some(PlayerProfile {
        player_id: player.id,
        name: player.name.clone(),
        position: player.position.clone(),
        club: snapshot.club_name(player.club_id).map(str::to_string),
        age: player.age,
        birthdate: player.birthdate,
        nationality: player.nationality.clone(),
        height: player.height,
        number: player.number,
        stats,
        rating: stats.rating(),
        history,
    })
}
