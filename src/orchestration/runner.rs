use crate::config::{Config, OutputFormat};
use crate::datasource::SnapshotSource;
use crate::error::AppError;
use crate::report::{write_report_csv, ExportError, Report};
use std::io::Write;
use std::sync::Arc;

/// Loads the configured user's snapshot and renders the configured report.
#[derive(Debug, Clone)]
pub struct ReportRunner {
    source: Arc<dyn SnapshotSource>,
    config: Config,
}

impl ReportRunner {
    pub fn new(source: Arc<dyn SnapshotSource>, config: Config) -> Self {
        Self { source, config }
    }

    /// Build the report from a fresh snapshot.
    pub fn run(&self) -> Result<Report, AppError> {
        let snapshot = self.source.load(&self.config.user_id)?;
        let report = Report::build(self.config.report, &snapshot, self.config.tournament_id);
        let fingerprint = report.fingerprint()?;

        tracing::info!(
            report = ?self.config.report,
            tournament = ?self.config.tournament_id,
            fingerprint = %fingerprint,
            "report built"
        );
        Ok(report)
    }

    /// Write `report` to `out` in the configured format.
    pub fn write<W: Write>(&self, report: &Report, mut out: W) -> Result<(), AppError> {
        match self.config.output_format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut out, report)?;
                writeln!(out).map_err(ExportError::from)?;
            }
            OutputFormat::Csv => write_report_csv(out, report)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::MockSnapshotSource;
    use crate::domain::{Club, ClubId, TournamentId, UserId};
    use crate::report::{ReportKind, StandingsOutcome};
    use std::path::PathBuf;

    fn config(report: ReportKind, output_format: OutputFormat) -> Config {
        Config {
            store_path: PathBuf::from("/unused"),
            user_id: UserId::new("1"),
            tournament_id: Some(TournamentId::new(1)),
            report,
            output_format,
        }
    }

    fn source() -> Arc<dyn SnapshotSource> {
        let club = |id: i64, user: &str| Club {
            id: ClubId::new(id),
            name: format!("Club {}", id),
            country: String::new(),
            logo: None,
            tournament_id: Some(TournamentId::new(1)),
            user_id: UserId::new(user),
        };
        Arc::new(
            MockSnapshotSource::new()
                .with_club(club(1, "1"))
                .with_club(club(2, "2")),
        )
    }

    #[test]
    fn test_run_scopes_to_configured_user() {
        let runner = ReportRunner::new(source(), config(ReportKind::Standings, OutputFormat::Json));
        match runner.run().unwrap() {
            Report::Standings(StandingsOutcome::Table(rows)) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].club_name, "Club 1");
            }
            other => panic!("unexpected report: {:?}", other),
        }
    }

    #[test]
    fn test_write_csv() {
        let runner = ReportRunner::new(source(), config(ReportKind::Standings, OutputFormat::Csv));
        let report = runner.run().unwrap();
        let mut out = Vec::new();
        runner.write(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("position,club,"));
        assert!(text.contains("1,Club 1,0,0,0,0,0,0,0,0,champion"));
    }

    #[test]
    fn test_write_json() {
        let runner = ReportRunner::new(source(), config(ReportKind::Dashboard, OutputFormat::Json));
        let report = runner.run().unwrap();
        let mut out = Vec::new();
        runner.write(&report, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["report"], "dashboard");
        assert_eq!(value["data"]["clubs"], 1);
    }
}
