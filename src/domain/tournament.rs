//! Tournament record.

use crate::domain::dates::optional_date;
use crate::domain::{TournamentId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A competition owning clubs and matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    #[serde(default)]
    pub name: String,
    /// Game variant label, e.g. `efootball` or `fifa`.
    #[serde(default)]
    pub game: String,
    #[serde(default, alias = "start_date", deserialize_with = "optional_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(alias = "user_id")]
    pub user_id: UserId,
    #[serde(default, alias = "created_at", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Tournament {
    /// Human-facing name of the game variant.
    pub fn game_label(&self) -> &str {
        match self.game.as_str() {
            "efootball" => "eFootball",
            "fifa" => "FIFA",
            other => other,
        }
    }
}
