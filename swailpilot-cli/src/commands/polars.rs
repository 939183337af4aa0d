//! Polars command - print the boat's speed polar table.

use crate::commands::common::GlobalArgs;
use crate::error::CliError;
use crate::runner::CliRunner;

pub fn run(global: &GlobalArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(global)?;
    runner.log_startup("polars");

    let client = runner.create_client()?;
    let polars = runner.block_on(client.polars())?;

    if polars.is_empty() {
        println!("No polar data for boat {}", client.handle().boat_id);
        return Ok(());
    }

    println!("{:>5}  {:>6}", "COG", "Speed");
    for polar in &polars {
        println!("{:>4}°  {:>6.2}", polar.cog, polar.speed);
    }
    Ok(())
}
