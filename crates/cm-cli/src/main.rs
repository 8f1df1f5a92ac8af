//! `citymap` — shortest pedestrian and car routes between named city points.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use cm_cli::{App, Cli, init_logging, report_failure};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_format).context("failed to initialise logging")?;

    let mut app = App::new(cli.run_options());
    match app.run() {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => Ok(ExitCode::from(report_failure(&e))),
    }
}
