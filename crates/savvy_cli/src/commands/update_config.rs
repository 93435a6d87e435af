//! Update-config command.

use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct UpdateConfigArgs {
    /// The name of the environment to update
    pub environment_name: String,

    /// New values for the environment, as a dictionary string,
    /// e.g. "{'config_name': 'new_value'}"
    #[arg(long, default_value = "")]
    pub update: String,
}

pub fn execute(args: UpdateConfigArgs) -> Result<()> {
    println!(
        "Updating config {} for a environment {}",
        args.update, args.environment_name
    );
    Ok(())
}
