use anyhow::Context;
use rxflow_console::{logging::init_tracing, Console, Session};
use rxflow_store::{Config, ReportWriter};
use std::io;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;
    init_tracing(&config.logging.filter)?;

    tracing::info!(
        start_day = config.session.start_day,
        report_dir = %config.report.directory.display(),
        "Starting rxflow console"
    );

    let session = Session::new(
        config.session.start_day,
        ReportWriter::new(config.report.directory.clone()),
    );

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock(), session);
    console.run()?;

    tracing::info!("rxflow console exited");
    Ok(())
}
