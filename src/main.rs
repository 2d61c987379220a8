use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "devmate", version = env!("CARGO_PKG_VERSION"), about = "Your personal dev automation assistant", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a Terraform project with standard TF files
    Tf {
        /// Project name
        name: String,
    },

    /// Scaffold a Docker configuration
    Docker {
        /// Project name
        name: String,
    },

    /// Create a Python virtual environment
    Env {
        /// Environment name
        name: String,
    },

    /// Run tests using pytest
    Test {
        /// Path to run tests in
        #[arg(default_value = ".")]
        path: String,
    },

    /// Set up Sphinx documentation for a project
    Doc {
        /// Project name
        name: String,
    },

    /// Check for outdated Python dependencies
    Dep {
        /// Project name
        name: String,
    },

    /// Scaffold a new project interactively
    Scaffold {
        /// Project name
        name: String,
    },

    /// Generate a Markdown outline of the project structure
    Mkdoc,

    /// Clean up cache directories and compiled artifacts
    Cleanup,

    /// Display project metrics
    Dashboard {
        /// Project directory to inspect
        #[arg(default_value = ".")]
        path: String,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show detailed help for all commands
    Helpinfo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tf { name } => {
            commands::tf::execute(&name)?;
        }
        Commands::Docker { name } => {
            commands::docker::execute(&name)?;
        }
        Commands::Env { name } => {
            commands::env::execute(&name)?;
        }
        Commands::Test { path } => {
            commands::test::execute(&path)?;
        }
        Commands::Doc { name } => {
            commands::doc::execute(&name)?;
        }
        Commands::Dep { name } => {
            commands::dep::execute(&name)?;
        }
        Commands::Scaffold { name } => {
            commands::scaffold::execute(&name)?;
        }
        Commands::Mkdoc => {
            commands::mkdoc::execute()?;
        }
        Commands::Cleanup => {
            commands::cleanup::execute()?;
        }
        Commands::Dashboard { path, json } => {
            commands::dashboard::execute(&path, json)?;
        }
        Commands::Helpinfo => {
            commands::helpinfo::execute();
        }
    }

    Ok(())
}
