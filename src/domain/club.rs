//! Club record.

use crate::domain::primitives::optional_id;
use crate::domain::{ClubId, TournamentId, UserId};
use serde::{Deserialize, Serialize};

/// A club; optionally entered in one tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: ClubId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Owning tournament. May be unset or point at a deleted tournament.
    #[serde(default, alias = "tournament_id", deserialize_with = "optional_id")]
    pub tournament_id: Option<TournamentId>,
    #[serde(alias = "user_id")]
    pub user_id: UserId,
}

impl Club {
    pub fn is_in(&self, tournament: TournamentId) -> bool {
        self.tournament_id == Some(tournament)
    }
}
