//! Folding finished matches into per-player, per-club and per-contributor
//! accumulators.
//!
//! Every fold re-checks `Fixture::is_finished`, so a scheduled match passed in
//! by mistake contributes nothing.

use super::interpreter::UNKNOWN_PLAYER_LABEL;
use super::resolver::PlayerResolver;
use crate::domain::{ClubId, EventKind, Fixture, MatchOutcome, Player, PlayerId, Snapshot, TournamentId};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::collections::HashMap;

/// Per-player counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    /// Finished matches with at least one event attributed to the player.
    pub matches: u32,
    pub goals: u32,
    pub assists: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    /// Every attributed event, unknown kinds included.
    pub total_events: u32,
}

impl PlayerStats {
    pub fn record(&mut self, kind: &EventKind) {
        self.total_events += 1;
        match kind {
            EventKind::Goal => self.goals += 1,
            EventKind::Assist => self.assists += 1,
            EventKind::YellowCard => self.yellow_cards += 1,
            EventKind::RedCard => self.red_cards += 1,
            EventKind::Unknown(_) => {}
        }
    }

    /// Only players with at least one attributed event appear in statistics
    /// tables.
    pub fn is_active(&self) -> bool {
        self.total_events > 0
    }

    /// `(2 * goals + assists) / matches`, rounded to one decimal place.
    /// `None` when the player has no matches.
    ///
    /// The quotient is taken in `f64` and rounded from its exact binary value,
    /// so `7 / 20` (stored as 0.34999...) gives 0.3, not 0.4.
    pub fn rating(&self) -> Option<Decimal> {
        if self.matches == 0 {
            return None;
        }
        let quotient = f64::from(2 * self.goals + self.assists) / f64::from(self.matches);
        let exact = Decimal::from_f64_retain(quotient)?;
        Some(exact.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
    }
}

/// Per-club results over finished matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubStats {
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl ClubStats {
    pub fn record_result(&mut self, goals_for: u32, goals_against: u32) {
        self.played += 1;
        self.goals_for += goals_for;
        self.goals_against += goals_against;
        match MatchOutcome::from_scores(goals_for, goals_against) {
            MatchOutcome::Win => self.wins += 1,
            MatchOutcome::Draw => self.draws += 1,
            MatchOutcome::Loss => self.losses += 1,
        }
    }

    /// Goals for minus goals against; may be negative.
    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }

    /// 3 per win, 1 per draw.
    pub fn points(&self) -> u32 {
        self.wins * MatchOutcome::Win.points() + self.draws * MatchOutcome::Draw.points()
    }
}

/// Identity of a leaderboard contributor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContributorKey {
    /// A resolved player record.
    Player(PlayerId),
    /// An event that did not resolve, keyed by its raw id, else its free-text name.
    Unresolved(String),
}

/// What to do with events whose player does not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnresolvedPolicy {
    /// Keep them under the event's own player/team labels.
    FallbackLabel,
    /// Leave them out.
    Exclude,
}

/// Running total of one event kind for one contributor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tally {
    #[serde(skip)]
    pub key: ContributorKey,
    pub player_id: Option<PlayerId>,
    pub name: String,
    pub club: Option<String>,
    pub count: u32,
}

/// Finished matches, optionally restricted to one tournament, in input order.
pub fn finished_matches<'a, I>(matches: I, tournament: Option<TournamentId>) -> Vec<&'a Fixture>
where
    I: IntoIterator<Item = &'a Fixture>,
{
    matches
        .into_iter()
        .filter(|m| m.is_finished())
        .filter(|m| tournament.map_or(true, |t| m.is_in(t)))
        .collect()
}

/// Fold `player`'s events across `matches`.
pub fn aggregate_player(
    player: &Player,
    matches: &[&Fixture],
    resolver: &PlayerResolver<'_>,
) -> PlayerStats {
    let mut stats = PlayerStats::default();
    for fixture in matches.iter().filter(|m| m.is_finished()) {
        let mut appeared = false;
        for event in &fixture.events {
            if resolver.is_attributed_to(event, player) {
                appeared = true;
                stats.record(&event.kind);
            }
        }
        if appeared {
            stats.matches += 1;
        }
    }
    stats
}

/// Fold the results of every finished match in `matches` that involves `club`.
pub fn aggregate_club(club: ClubId, matches: &[&Fixture]) -> ClubStats {
    let mut stats = ClubStats::default();
    for (goals_for, goals_against) in matches.iter().filter_map(|m| m.score_for(club)) {
        stats.record_result(goals_for, goals_against);
    }
    stats
}

/// Count events of `kind` across finished `matches`.
pub fn count_events(matches: &[&Fixture], kind: &EventKind) -> u32 {
    matches
        .iter()
        .filter(|m| m.is_finished())
        .flat_map(|m| m.events.iter())
        .filter(|e| &e.kind == kind)
        .count() as u32
}

/// Tally events of `kind` per contributor, in first-encounter order.
///
/// Resolved players carry their record's name and club name. Under
/// [`UnresolvedPolicy::FallbackLabel`] the event's free-text labels stand in
/// wherever a record does not supply a value.
pub fn tally_events(
    matches: &[&Fixture],
    kind: &EventKind,
    resolver: &PlayerResolver<'_>,
    snapshot: &Snapshot,
    policy: UnresolvedPolicy,
) -> Vec<Tally> {
    let mut tallies: Vec<Tally> = Vec::new();
    let mut index: HashMap<ContributorKey, usize> = HashMap::new();

    for fixture in matches.iter().filter(|m| m.is_finished()) {
        for event in fixture.events.iter().filter(|e| &e.kind == kind) {
            let resolved = resolver.resolve(event).player();
            let fallback = policy == UnresolvedPolicy::FallbackLabel;

            let key = match resolved {
                Some(p) => ContributorKey::Player(p.id),
                None if fallback => ContributorKey::Unresolved(
                    event
                        .player_id
                        .map(|id| id.to_string())
                        .or_else(|| event.name().map(str::to_string))
                        .unwrap_or_default(),
                ),
                None => continue,
            };

            let slot = *index.entry(key.clone()).or_insert_with(|| {
                let (player_id, name, club) = match resolved {
                    Some(p) => (
                        Some(p.id),
                        p.name.clone(),
                        snapshot
                            .club_name(p.club_id)
                            .map(str::to_string)
                            .or_else(|| fallback.then(|| event.team().map(str::to_string)).flatten()),
                    ),
                    None => (
                        None,
                        event
                            .name()
                            .map(str::to_string)
                            .or_else(|| event.player_id.map(|id| format!("#{}", id)))
                            .unwrap_or_else(|| UNKNOWN_PLAYER_LABEL.to_string()),
                        event.team().map(str::to_string),
                    ),
                };
                tallies.push(Tally {
                    key,
                    player_id,
                    name,
                    club,
                    count: 0,
                });
                tallies.len() - 1
            });
            tallies[slot].count += 1;
        }
    }

    tracing::debug!(kind = %kind, contributors = tallies.len(), "tallied events");
    tallies
}
