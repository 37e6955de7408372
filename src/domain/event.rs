//! Match events and their closed set of kinds.

use crate::domain::primitives::optional_id;
use crate::domain::PlayerId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Kind of an event recorded in a match log.
///
/// Stored records carry the kind as free text. Recognized labels (the
/// Portuguese ones the local store writes and their English equivalents) map
/// to the counted variants; anything else is kept verbatim as `Unknown`, which
/// is listed but never counted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    Goal,
    Assist,
    YellowCard,
    RedCard,
    Unknown(String),
}

impl EventKind {
    /// Classify a stored type label. Matching is exact (case-sensitive).
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Gol" | "Goal" => EventKind::Goal,
            "Assistência" | "Assist" => EventKind::Assist,
            "Cartão Amarelo" | "YellowCard" => EventKind::YellowCard,
            "Cartão Vermelho" | "RedCard" => EventKind::RedCard,
            _ => EventKind::Unknown(raw.to_string()),
        }
    }

    /// Canonical label; unknown kinds keep their raw text.
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Goal => "Goal",
            EventKind::Assist => "Assist",
            EventKind::YellowCard => "YellowCard",
            EventKind::RedCard => "RedCard",
            EventKind::Unknown(raw) => raw,
        }
    }

    /// Whether this kind feeds any counter.
    pub fn is_counted(&self) -> bool {
        !matches!(self, EventKind::Unknown(_))
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for EventKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(EventKind::parse(&raw))
    }
}

/// One entry of a match's event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// Player the event is attributed to, when the log recorded an id.
    #[serde(
        default,
        alias = "player_id",
        deserialize_with = "optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub player_id: Option<PlayerId>,
    /// Free-text player name as typed into the log.
    #[serde(default, rename = "player", skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
    /// Free-text team label as typed into the log.
    #[serde(default, rename = "team", skip_serializing_if = "Option::is_none")]
    pub team_label: Option<String>,
}

impl MatchEvent {
    pub fn new(kind: EventKind, player_id: Option<PlayerId>, player_name: Option<&str>) -> Self {
        MatchEvent {
            kind,
            player_id,
            player_name: player_name.map(str::to_string),
            team_label: None,
        }
    }

    pub fn with_team(mut self, team: &str) -> Self {
        self.team_label = Some(team.to_string());
        self
    }

    /// Non-empty free-text player name, if any.
    pub fn name(&self) -> Option<&str> {
        self.player_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Non-empty free-text team label, if any.
    pub fn team(&self) -> Option<&str> {
        self.team_label
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
