//! Domain primitives: typed identifiers for every entity.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Wire form of an identifier.
///
/// The local store writes numeric ids, but form-derived records sometimes
/// carry them as strings ("12"). Both are accepted and normalized here so the
/// engine only ever compares typed values.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Text(String),
}

fn parse_numeric_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawId::deserialize(deserializer)? {
        RawId::Int(v) => Ok(v),
        RawId::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid numeric id: {:?}", s))),
    }
}

/// Deserialize an optional reference. `null`, a missing field and an empty
/// string (an unselected form input) all mean "unassigned".
pub(crate) fn optional_id<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<i64>,
{
    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Int(v)) => Ok(Some(T::from(v))),
        Some(RawId::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(RawId::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map(|v| Some(T::from(v)))
            .map_err(|_| serde::de::Error::custom(format!("invalid numeric id: {:?}", s))),
    }
}

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(id: i64) -> Self {
                $name(id)
            }

            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                parse_numeric_id(deserializer).map($name)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                $name(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Tournament identifier.
    TournamentId
);
numeric_id!(
    /// Club identifier.
    ClubId
);
numeric_id!(
    /// Player identifier.
    PlayerId
);
numeric_id!(
    /// Coach identifier.
    CoachId
);
numeric_id!(
    /// Match identifier.
    MatchId
);
numeric_id!(
    /// Round identifier.
    RoundId
);

/// Owning-user identifier.
///
/// The local store uses numeric ids while the hosted backend hands out UUID
/// strings, so the value is kept as text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        UserId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(v) => UserId(v.to_string()),
            RawId::Text(s) => UserId(s.trim().to_string()),
        })
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_accepts_number_and_string() {
        let a: ClubId = serde_json::from_str("42").unwrap();
        let b: ClubId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_i64(), 42);
    }

    #[test]
    fn test_numeric_id_rejects_garbage() {
        let result: Result<PlayerId, _> = serde_json::from_str("\"abc\"");
        assert!(result.is_err());
    }

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "optional_id")]
        club: Option<ClubId>,
    }

    #[test]
    fn test_optional_id_treats_empty_and_null_as_unassigned() {
        let empty: Holder = serde_json::from_str(r#"{"club": ""}"#).unwrap();
        let null: Holder = serde_json::from_str(r#"{"club": null}"#).unwrap();
        let missing: Holder = serde_json::from_str("{}").unwrap();
        let set: Holder = serde_json::from_str(r#"{"club": "3"}"#).unwrap();
        assert_eq!(empty.club, None);
        assert_eq!(null.club, None);
        assert_eq!(missing.club, None);
        assert_eq!(set.club, Some(ClubId::new(3)));
    }

    #[test]
    fn test_user_id_from_number_matches_string() {
        let a: UserId = serde_json::from_str("1700000000000").unwrap();
        let b: UserId = serde_json::from_str("\"1700000000000\"").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_user_id_keeps_uuid_text() {
        let id: UserId =
            serde_json::from_str("\"5b0c8e8e-6f1e-4a53-9d5e-3f4b2a1c0d9e\"").unwrap();
        assert_eq!(id.as_str(), "5b0c8e8e-6f1e-4a53-9d5e-3f4b2a1c0d9e");
    }

    #[test]
    fn test_id_serializes_as_number() {
        let json = serde_json::to_string(&TournamentId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn test_id_display() {
        assert_eq!(MatchId::new(99).to_string(), "99");
    }
}
