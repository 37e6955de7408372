//! Match event log interpretation: per-player event extraction and raw
//! event listings.

use super::resolver::{PlayerResolver, Resolution};
use crate::domain::{EventKind, Fixture, Player, PlayerId, Snapshot};
use serde::Serialize;

/// Fallback label for an event that names no player at all.
pub const UNKNOWN_PLAYER_LABEL: &str = "Unknown player";

/// One event attributed to a player, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEvent {
    /// Position in the match's event log.
    pub sequence: usize,
    pub kind: EventKind,
}

/// How an event line's player label was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribution {
    Id,
    Name,
    Unresolved,
}

/// Display-ready line of a match's raw event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLine {
    pub sequence: usize,
    pub kind: EventKind,
    pub player_id: Option<PlayerId>,
    pub player_label: String,
    pub team_label: Option<String>,
    pub attribution: Attribution,
}

/// Events of `fixture` attributed to `player`, in log order.
///
/// Unknown kinds are included so callers can list them; they feed no counter.
pub fn interpret(fixture: &Fixture, player: &Player, resolver: &PlayerResolver<'_>) -> Vec<PlayerEvent> {
    fixture
        .events
        .iter()
        .enumerate()
        .filter(|(_, event)| resolver.is_attributed_to(event, player))
        .map(|(sequence, event)| PlayerEvent {
            sequence,
            kind: event.kind.clone(),
        })
        .collect()
}

/// Whether `player` took part in `fixture`.
///
/// There is no lineup data: a player counts as having played iff at least one
/// event in the log resolves to them. A player who appeared without being
/// named in any event is not counted.
pub fn played_in(fixture: &Fixture, player: &Player, resolver: &PlayerResolver<'_>) -> bool {
    fixture
        .events
        .iter()
        .any(|event| resolver.is_attributed_to(event, player))
}

/// The full event log of `fixture` with display labels.
///
/// Every event is listed, including unknown kinds and events whose player
/// does not resolve. Unresolved events fall back to the free-text name, then
/// to the raw id, then to [`UNKNOWN_PLAYER_LABEL`].
pub fn describe_events(
    fixture: &Fixture,
    resolver: &PlayerResolver<'_>,
    snapshot: &Snapshot,
) -> Vec<EventLine> {
    fixture
        .events
        .iter()
        .enumerate()
        .map(|(sequence, event)| {
            let resolution = resolver.resolve(event);
            let attribution = match resolution {
                Resolution::ById(_) => Attribution::Id,
                Resolution::ByName(_) => Attribution::Name,
                Resolution::Unresolved => Attribution::Unresolved,
            };

            let (player_id, player_label, club_name) = match resolution.player() {
                Some(p) => (
                    Some(p.id),
                    p.name.clone(),
                    snapshot.club_name(p.club_id).map(str::to_string),
                ),
                None => {
                    let label = event
                        .name()
                        .map(str::to_string)
                        .or_else(|| event.player_id.map(|id| format!("#{}", id)))
                        .unwrap_or_else(|| UNKNOWN_PLAYER_LABEL.to_string());
                    (event.player_id, label, None)
                }
            };

            EventLine {
                sequence,
                kind: event.kind.clone(),
                player_id,
                player_label,
                team_label: club_name.or_else(|| event.team().map(str::to_string)),
                attribution,
            }
        })
        .collect()
}
