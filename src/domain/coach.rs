//! Coach record.

use crate::domain::dates::optional_date;
use crate::domain::primitives::optional_id;
use crate::domain::{ClubId, CoachId, UserId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coach {
    pub id: CoachId,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "optional_date")]
    pub birthdate: Option<NaiveDate>,
    #[serde(default)]
    pub nationality: String,
    /// Years of experience.
    #[serde(default)]
    pub experience: Option<u32>,
    /// Preferred formation, e.g. `4-3-3`.
    #[serde(default)]
    pub formation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, alias = "club_id", deserialize_with = "optional_id")]
    pub club_id: Option<ClubId>,
    #[serde(alias = "user_id")]
    pub user_id: UserId,
}
