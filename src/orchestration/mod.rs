//! Wiring between configuration, the snapshot source and report output.

pub mod runner;

pub use runner::ReportRunner;
