//! New-route command.

use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct NewRouteArgs {
    /// The name of the new route
    pub name: String,
}

pub fn execute(args: NewRouteArgs) -> Result<()> {
    println!("Creating a new route {}", args.name);
    Ok(())
}
