pub mod config;
pub mod datasource;
pub mod domain;
pub mod engine;
pub mod error;
pub mod orchestration;
pub mod report;
pub mod schedule;

pub use config::{Config, OutputFormat};
pub use datasource::{JsonStoreSource, MockSnapshotSource, SnapshotSource, SourceError};
pub use domain::{
    Club, ClubId, Coach, EventKind, Fixture, MatchEvent, MatchStatus, Player, PlayerId, Round,
    Snapshot, Tournament, TournamentId, UserId,
};
pub use error::AppError;
pub use orchestration::ReportRunner;
pub use report::{Report, ReportKind};
