//! New-project command - Create a project from the structure definition.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use savvy_core::{ProjectManager, ScaffoldConfig, ScaffoldError};

use crate::progress::BarProgress;
use crate::tree;

#[derive(Args)]
pub struct NewProjectArgs {
    /// The name of the new project
    pub project_name: String,

    /// The project directory path (defaults to the current directory)
    #[arg(long)]
    pub project_dir: Option<PathBuf>,

    /// Structure definition file (defaults to ./structure.yaml)
    #[arg(long, env = "SAVVY_STRUCTURE")]
    pub structure: Option<PathBuf>,

    /// Templates directory (defaults to ./templates)
    #[arg(long, env = "SAVVY_TEMPLATES_DIR")]
    pub templates_dir: Option<PathBuf>,
}

pub fn execute(args: NewProjectArgs, verbose: bool) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let project_dir = args.project_dir.unwrap_or_else(|| current_dir.clone());

    let mut config = ScaffoldConfig::from_dir(&current_dir);
    if let Some(structure) = args.structure {
        config = config.with_structure_path(structure);
    }
    if let Some(templates_dir) = args.templates_dir {
        config = config.with_templates_dir(templates_dir);
    }

    info!("Creating project '{}' in {:?}", args.project_name, project_dir);

    let manager = ProjectManager::new(config);
    let mut progress = BarProgress::new("Creating files...");

    match manager.new_project(&project_dir, &args.project_name, &mut progress) {
        Ok(result) => {
            progress.finish();
            println!("{}", result);
            if verbose {
                let rendered = tree::render_tree(result.project_path())
                    .context("Failed to render project tree")?;
                print!("{}", rendered);
            }
            Ok(())
        }
        Err(err @ ScaffoldError::ProjectExists { .. }) => {
            progress.finish();
            println!("Error: {}", err);
            Ok(())
        }
        Err(err) => {
            progress.finish();
            Err(err).context("Failed to create project")
        }
    }
}
