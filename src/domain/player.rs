//! Player record.

use crate::domain::dates::optional_date;
use crate::domain::primitives::optional_id;
use crate::domain::{ClubId, PlayerId, UserId};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A registered player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "optional_date")]
    pub birthdate: Option<NaiveDate>,
    /// Age as stored when the record was last saved.
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub nationality: String,
    /// Shirt number.
    #[serde(default)]
    pub number: Option<u32>,
    /// Height in centimetres.
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, alias = "club_id", deserialize_with = "optional_id")]
    pub club_id: Option<ClubId>,
    #[serde(alias = "user_id")]
    pub user_id: UserId,
}

impl Player {
    /// Age on the given day: the stored age if present, otherwise the
    /// difference in calendar years between `today` and the birthdate.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        if self.age.is_some() {
            return self.age;
        }
        let birthdate = self.birthdate?;
        u32::try_from(today.year() - birthdate.year()).ok()
    }

    pub fn belongs_to(&self, club: ClubId) -> bool {
        self.club_id == Some(club)
    }
}
