//! Infos command - print current boat telemetry.

use swailpilot::boat::TelemetrySource;

use crate::commands::common::GlobalArgs;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Fetch one telemetry snapshot and print it.
pub fn run(global: &GlobalArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(global)?;
    runner.log_startup("infos");

    let client = runner.create_client()?;
    let infos = runner.block_on(client.boat_infos())?;

    println!("{}", infos);
    Ok(())
}
