//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// modelforge CLI - EF Core model scaffolding from SQL Server
#[derive(Parser, Debug)]
#[command(name = "modelforge")]
#[command(author = "Pegasus Heavy Industries LLC")]
#[command(version)]
#[command(about = "modelforge CLI - scaffold EF Core models from a SQL Server schema", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a modelforge.toml configuration file
    Init(InitArgs),

    /// Generate model classes from the database schema
    Generate(GenerateArgs),

    /// Display version information
    Version,
}

/// Arguments for the `init` command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path to initialize (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `generate` command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Database connection string (overrides the configuration file)
    #[arg(short, long, env = "MODELFORGE_URL")]
    pub url: Option<String>,

    /// Output directory for generated files (overrides the configuration file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Context class name (overrides the configuration file)
    #[arg(long)]
    pub context: Option<String>,
}
