use anyhow::Context;
use league_ledger::{config::Config, JsonStoreSource, ReportRunner, SnapshotSource};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    // Load configuration
    let config = Config::from_env().context("Configuration error")?;

    let source: Arc<dyn SnapshotSource> = Arc::new(JsonStoreSource::new(config.store_path.clone()));
    tracing::info!("Reading league store at {}", config.store_path.display());

    let runner = ReportRunner::new(source, config);
    let report = runner.run().context("Failed to build report")?;

    let stdout = std::io::stdout();
    runner
        .write(&report, stdout.lock())
        .context("Failed to write report")?;

    Ok(())
}
