//! savvy CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success (including a refused, already existing project)
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Structure definition error
//! - 4: Template error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use savvy_core::ScaffoldError;

mod commands;
mod progress;
mod tree;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const SPEC_ERROR: u8 = 3;
    pub const TEMPLATE_ERROR: u8 = 4;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "savvy=debug" } else { "savvy=info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},warn", default_level)));

    // A subscriber may already be installed; keep going with it.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if cli.verbose {
        println!("Will write verbose output");
    }

    let result = match cli.command {
        Commands::NewProject(args) => commands::new_project::execute(args, cli.verbose),
        Commands::NewRoute(args) => commands::new_route::execute(args),
        Commands::NewScenario(args) => commands::new_scenario::execute(args),
        Commands::UpdateConfig(args) => commands::update_config::execute(args),
        Commands::Run(args) => commands::run::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Map an error to its exit code.
fn categorize_error(e: &anyhow::Error) -> u8 {
    match e.downcast_ref::<ScaffoldError>() {
        Some(ScaffoldError::Spec(_)) => ExitCodes::SPEC_ERROR,
        Some(ScaffoldError::Template(_)) => ExitCodes::TEMPLATE_ERROR,
        Some(ScaffoldError::UnsafePath(_)) => ExitCodes::SPEC_ERROR,
        Some(ScaffoldError::InvalidProjectName(_)) => ExitCodes::INVALID_ARGS,
        // ProjectExists is reported by new-project itself and never gets here
        Some(ScaffoldError::ProjectExists { .. } | ScaffoldError::Io(_)) | None => {
            ExitCodes::GENERAL_ERROR
        }
    }
}
