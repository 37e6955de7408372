//! CSV rendering of tabular reports.

use super::{DashboardSummary, LeaderboardRow, Report, ScorersReport, StandingsOutcome, StatisticsReport};
use crate::engine::{PlayerTableRow, PositionBadge, StandingRow};
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv write error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A row type with a fixed CSV layout.
pub trait CsvTable {
    fn headers() -> &'static [&'static str];

    fn record(&self) -> Vec<String>;
}

fn or_empty<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl CsvTable for StandingRow {
    fn headers() -> &'static [&'static str] {
        &[
            "position", "club", "played", "wins", "draws", "losses", "goals_for",
            "goals_against", "goal_difference", "points", "badge",
        ]
    }

    fn record(&self) -> Vec<String> {
        let badge = self.badge.map(|b| match b {
            PositionBadge::Champion => "champion",
            PositionBadge::Qualified => "qualified",
            PositionBadge::Relegation => "relegation",
        });
        vec![
            self.position.to_string(),
            self.club_name.clone(),
            self.played.to_string(),
            self.wins.to_string(),
            self.draws.to_string(),
            self.losses.to_string(),
            self.goals_for.to_string(),
            self.goals_against.to_string(),
            self.goal_difference.to_string(),
            self.points.to_string(),
            or_empty(badge),
        ]
    }
}

impl CsvTable for LeaderboardRow {
    fn headers() -> &'static [&'static str] {
        &["rank", "player", "club", "count"]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.rank.to_string(),
            self.name.clone(),
            self.club.clone().unwrap_or_default(),
            self.count.to_string(),
        ]
    }
}

impl CsvTable for PlayerTableRow {
    fn headers() -> &'static [&'static str] {
        &[
            "rank", "player", "club", "position", "matches", "goals", "assists", "yellow_cards",
            "red_cards", "total_events",
        ]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.rank.to_string(),
            self.name.clone(),
            self.club.clone().unwrap_or_else(|| "N/A".to_string()),
            self.position.clone(),
            self.stats.matches.to_string(),
            self.stats.goals.to_string(),
            self.stats.assists.to_string(),
            self.stats.yellow_cards.to_string(),
            self.stats.red_cards.to_string(),
            self.stats.total_events.to_string(),
        ]
    }
}

impl CsvTable for DashboardSummary {
    fn headers() -> &'static [&'static str] {
        &["tournaments", "clubs", "players", "coaches", "matches", "total_goals"]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.tournaments.to_string(),
            self.clubs.to_string(),
            self.players.to_string(),
            self.coaches.to_string(),
            self.matches.to_string(),
            self.total_goals.to_string(),
        ]
    }
}

/// Write `rows` as CSV with a header line. An empty slice yields the header only.
pub fn write_csv<W: Write, T: CsvTable>(out: W, rows: &[T]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(T::headers())?;
    for row in rows {
        writer.write_record(row.record())?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `report` as CSV. Outcomes without a table produce the header line only.
pub fn write_report_csv<W: Write>(out: W, report: &Report) -> Result<(), ExportError> {
    match report {
        Report::Dashboard(summary) => write_csv(out, std::slice::from_ref(summary)),
        Report::Standings(StandingsOutcome::Table(rows)) => write_csv(out, rows),
        Report::Standings(_) => write_csv::<_, StandingRow>(out, &[]),
        Report::Scorers(ScorersReport::Table(rows)) => write_csv(out, rows),
        Report::Scorers(_) => write_csv::<_, LeaderboardRow>(out, &[]),
        Report::Statistics(StatisticsReport::Table(rows)) => write_csv(out, rows),
        Report::Statistics(_) => write_csv::<_, PlayerTableRow>(out, &[]),
    }
}
