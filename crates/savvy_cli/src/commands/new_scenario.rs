//! New-scenario command.

use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct NewScenarioArgs {
    /// The name of the route
    pub route_name: String,

    /// The name of the new scenario
    pub scenario_name: String,
}

pub fn execute(args: NewScenarioArgs) -> Result<()> {
    println!(
        "Creating a new scenario {} for a route {}",
        args.scenario_name, args.route_name
    );
    Ok(())
}
