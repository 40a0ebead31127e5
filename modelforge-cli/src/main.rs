//! modelforge - scaffold EF Core models from a SQL Server schema.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use modelforge_cli::cli::{Cli, Command};
use modelforge_cli::commands;
use modelforge_cli::error::CliResult;
use modelforge_cli::output;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        output::newline();
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Init(args) => commands::init::run(args).await,
        Command::Generate(args) => commands::generate::run(args).await,
        Command::Version => commands::version::run().await,
    }
}
