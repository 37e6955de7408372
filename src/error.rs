use crate::config::ConfigError;
use crate::datasource::SourceError;
use crate::report::ExportError;
use crate::schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Snapshot source error: {0}")]
    Source(#[from] SourceError),
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
