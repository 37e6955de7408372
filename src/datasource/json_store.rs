//! Snapshot source backed by a directory of JSON collections.
//!
//! Each collection lives in its own file named after its key
//! (`tournaments.json`, `clubs.json`, ...) and holds a JSON array of records
//! of every user. A file that is not a JSON array fails the load; a single
//! record that does not fit its type is skipped with a warning.

use super::{SnapshotSource, SourceError};
use crate::domain::{Snapshot, UserId};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct JsonStoreSource {
    dir: PathBuf,
}

impl JsonStoreSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read one collection. A missing or blank file is an empty collection.
    /// Records are decoded one by one so that a bad record, which may belong
    /// to another user, does not hide the rest.
    fn read_collection<T: DeserializeOwned>(
        &self,
        collection: &'static str,
    ) -> Result<Vec<T>, SourceError> {
        let path = self.dir.join(format!("{}.json", collection));
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(collection, "collection file missing; treating as empty");
                return Ok(Vec::new());
            }
            Err(source) => return Err(SourceError::Io { path, source }),
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<Value> = serde_json::from_str(&raw)
            .map_err(|source| SourceError::Parse { collection, source })?;

        let total = records.len();
        let parsed: Vec<T> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!(collection, index, error = %e, "skipping unreadable record");
                    None
                }
            })
            .collect();

        if parsed.len() < total {
            tracing::warn!(
                collection,
                skipped = total - parsed.len(),
                "some records could not be read"
            );
        }
        Ok(parsed)
    }
}

impl SnapshotSource for JsonStoreSource {
    fn load(&self, user: &UserId) -> Result<Snapshot, SourceError> {
        let snapshot = Snapshot {
            tournaments: self.read_collection("tournaments")?,
            clubs: self.read_collection("clubs")?,
            players: self.read_collection("players")?,
            coaches: self.read_collection("coaches")?,
            matches: self.read_collection("matches")?,
            rounds: self.read_collection("rounds")?,
        }
        .scoped_to(user);

        tracing::info!(
            user = %user,
            tournaments = snapshot.tournaments.len(),
            clubs = snapshot.clubs.len(),
            players = snapshot.players.len(),
            matches = snapshot.matches.len(),
            "loaded snapshot from {}",
            self.dir.display()
        );
        Ok(snapshot)
    }
}
