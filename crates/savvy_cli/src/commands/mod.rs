//! CLI command definitions.
//!
//! `new-project` drives the scaffold engine. The route, scenario, config and
//! run commands are placeholders that only announce what they would do.

use clap::{Parser, Subcommand};

pub mod new_project;
pub mod new_route;
pub mod new_scenario;
pub mod run;
pub mod update_config;

/// savvy - scaffold and drive REST API test projects
#[derive(Parser)]
#[command(name = "savvy")]
#[command(version, about = "savvy - scaffold and drive REST API test projects")]
#[command(long_about = r#"
savvy creates new projects from a declarative structure definition and a
directory of templates.

WORKFLOWS:
  new-project   → Create a new project from structure.yaml and templates/
  new-route     → Create a new route in the project
  new-scenario  → Create a new scenario for a route
  update-config → Update the configuration of an environment
  run           → Run scenarios in an environment

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Structure definition error
  4 - Template error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new project
    #[command(name = "new-project")]
    NewProject(new_project::NewProjectArgs),

    /// Create a new route in the project
    #[command(name = "new-route")]
    NewRoute(new_route::NewRouteArgs),

    /// Create a new scenario for a route
    #[command(name = "new-scenario")]
    NewScenario(new_scenario::NewScenarioArgs),

    /// Update the configuration for a specific environment
    #[command(name = "update-config")]
    UpdateConfig(update_config::UpdateConfigArgs),

    /// Run tests in the specified environment
    Run(run::RunArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_new_project() {
        let cli = Cli::try_parse_from([
            "savvy",
            "-v",
            "new-project",
            "demo",
            "--project-dir",
            "/tmp",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::NewProject(args) => {
                assert_eq!(args.project_name, "demo");
                assert_eq!(args.project_dir, Some("/tmp".into()));
            }
            _ => panic!("expected new-project"),
        }
    }

    #[test]
    fn test_parse_run_defaults() {
        let cli = Cli::try_parse_from(["savvy", "run"]).unwrap();
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.environment_name, "stage");
                assert_eq!(args.parallel_count, 0);
            }
            _ => panic!("expected run"),
        }
    }
}
