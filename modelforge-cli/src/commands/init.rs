//! `modelforge init` command - write a starter configuration file.

use crate::cli::InitArgs;
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{CliError, CliResult};
use crate::output::{self, success};

/// Run the init command
pub async fn run(args: InitArgs) -> CliResult<()> {
    output::header("Initialize modelforge");

    std::fs::create_dir_all(&args.path)?;
    let config_path = args.path.join(CONFIG_FILE_NAME);

    if config_path.exists() && !args.force {
        return Err(CliError::Command(format!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        )));
    }

    Config::default().save(&config_path)?;

    output::kv("Config", &config_path.display().to_string());
    output::newline();
    success("Project initialized successfully");
    output::dim("Edit modelforge.toml, then run `modelforge generate`.");

    Ok(())
}
