//! Two-stage player resolution for event logs.

use crate::domain::{MatchEvent, Player, PlayerId};
use std::collections::HashMap;

/// How an event was tied to a player record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The event's player id matched a record.
    ById(&'a Player),
    /// The event had no usable id; its free-text name matched a record.
    ByName(&'a Player),
    /// Neither stage matched.
    Unresolved,
}

impl<'a> Resolution<'a> {
    pub fn player(&self) -> Option<&'a Player> {
        match *self {
            Resolution::ById(p) | Resolution::ByName(p) => Some(p),
            Resolution::Unresolved => None,
        }
    }
}

/// Resolves event attributions against a player collection.
///
/// Policy:
/// 1. If the event carries a player id and a record with that id exists, that
///    record wins.
/// 2. Otherwise, if the event carries a non-blank name, the first record (in
///    collection order) whose trimmed name equals the event's trimmed name
///    wins. The comparison is case-sensitive.
/// 3. Otherwise the event is unresolved.
///
/// The name stage runs only when the id stage had nothing to match, so an
/// event whose id resolves is never re-attributed by name.
#[derive(Debug)]
pub struct PlayerResolver<'a> {
    by_id: HashMap<PlayerId, &'a Player>,
    by_name: HashMap<&'a str, &'a Player>,
}

impl<'a> PlayerResolver<'a> {
    pub fn new(players: &'a [Player]) -> Self {
        let mut by_id = HashMap::with_capacity(players.len());
        let mut by_name = HashMap::with_capacity(players.len());

        for player in players {
            by_id.entry(player.id).or_insert(player);
            let name = player.name.trim();
            if !name.is_empty() {
                by_name.entry(name).or_insert(player);
            }
        }

        Self { by_id, by_name }
    }

    pub fn resolve(&self, event: &MatchEvent) -> Resolution<'a> {
        if let Some(player) = event.player_id.and_then(|id| self.by_id.get(&id).copied()) {
            return Resolution::ById(player);
        }

        match event.name().and_then(|name| self.by_name.get(name).copied()) {
            Some(player) => Resolution::ByName(player),
            None => Resolution::Unresolved,
        }
    }

    /// The resolved player's id, if any.
    pub fn resolve_id(&self, event: &MatchEvent) -> Option<PlayerId> {
        self.resolve(event).player().map(|p| p.id)
    }

    /// Whether `event` is attributed to `player` under this policy.
    pub fn is_attributed_to(&self, event: &MatchEvent, player: &Player) -> bool {
        self.resolve_id(event) == Some(player.id)
    }

    pub fn player(&self, id: PlayerId) -> Option<&'a Player> {
        self.by_id.get(&id).copied()
    }
}
