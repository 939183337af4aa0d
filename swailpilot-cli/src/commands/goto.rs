//! Goto command - steer a direct line to a waypoint.

use swailpilot::geo::parse_position;
use swailpilot::pilot::DirectLine;

use crate::commands::common::GlobalArgs;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Run the direct-line autopilot until interrupted.
///
/// The waypoint is validated before any config, logging or network work.
pub fn run(global: &GlobalArgs, lat: &str, lon: &str) -> Result<(), CliError> {
    let target = parse_position(lat, lon)?;

    let runner = CliRunner::new(global)?;
    runner.log_startup("goto");

    let client = runner.create_client()?;
    runner.run_autopilot(client, DirectLine::new(target))
}
