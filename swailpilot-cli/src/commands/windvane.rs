//! Windvane command - hold a constant true wind angle.

use swailpilot::pilot::WindVane;

use crate::commands::common::GlobalArgs;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Smallest accepted true wind angle (wind on port side).
pub const MIN_TWA: i32 = -180;
/// Largest accepted true wind angle (wind on starboard side).
pub const MAX_TWA: i32 = 180;

/// Check the requested angle is within [-180, 180].
pub fn validate_twa(twa: i32) -> Result<i32, CliError> {
    if (MIN_TWA..=MAX_TWA).contains(&twa) {
        Ok(twa)
    } else {
        Err(CliError::InvalidInput(format!(
            "true wind angle {} is outside [{}, {}]",
            twa, MIN_TWA, MAX_TWA
        )))
    }
}

pub fn run(global: &GlobalArgs, twa: i32) -> Result<(), CliError> {
    let twa = validate_twa(twa)?;

    let runner = CliRunner::new(global)?;
    runner.log_startup("windvane");

    let client = runner.create_client()?;
    runner.run_autopilot(client, WindVane::new(twa))
}
