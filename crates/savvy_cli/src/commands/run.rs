//! Run command.

use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct RunArgs {
    /// The environment name to run the tests in
    #[arg(long, default_value = "stage")]
    pub environment_name: String,

    /// The number of scenarios to run in parallel
    #[arg(long, default_value_t = 0)]
    pub parallel_count: u32,

    /// Execute scenarios with these comma-separated tags
    #[arg(long, default_value = "")]
    pub tags: String,

    /// Execute scenarios belonging to these comma-separated routes
    #[arg(long, default_value = "")]
    pub routes: String,

    /// Execute scenarios matching the filter condition
    #[arg(long, default_value = "")]
    pub filters: String,
}

pub fn execute(args: RunArgs) -> Result<()> {
    println!(
        "Running scenarios with configuration:: environment_name:{}, parallel_count:{}, tags:{}, routes:{}, filters:{}",
        args.environment_name, args.parallel_count, args.tags, args.routes, args.filters
    );
    Ok(())
}
