//! Snapshot source abstraction for loading a user's league records.

use crate::domain::{Snapshot, UserId};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub mod json_store;
pub mod mock;

pub use json_store::JsonStoreSource;
pub use mock::MockSnapshotSource;

/// Loads the records of one user as an immutable snapshot.
///
/// Implementations must return only records owned by `user`. Collections keep
/// their stored order; rankings fall back to it on ties.
pub trait SnapshotSource: Send + Sync + fmt::Debug {
    fn load(&self, user: &UserId) -> Result<Snapshot, SourceError>;
}

/// Error type for snapshot source operations.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The collection exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The collection was read but is not valid JSON for its record type.
    #[error("malformed {collection} collection: {source}")]
    Parse {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_display() {
        let err = SourceError::Io {
            path: PathBuf::from("/data/clubs.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to read /data/clubs.json: denied");

        let source = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let err = SourceError::Parse {
            collection: "matches",
            source,
        };
        assert!(err.to_string().starts_with("malformed matches collection: "));
    }
}
