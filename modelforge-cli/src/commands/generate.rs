//! `modelforge generate` command - scaffold model classes from the database.

use modelforge_emit::{Failure, FailureKind, Generator, TracingSink};
use modelforge_mssql::{MssqlPool, MssqlSchemaProvider};

use crate::cli::GenerateArgs;
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{CliError, CliResult};
use crate::output::{self, success};

/// Run the generate command
pub async fn run(args: GenerateArgs) -> CliResult<()> {
    output::header("Generate Models");

    let cwd = std::env::current_dir()?;

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| cwd.join(CONFIG_FILE_NAME));
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else if args.config.is_some() {
        return Err(CliError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    } else {
        Config::default()
    };

    // CLI arguments override the file.
    if let Some(url) = args.url.clone() {
        config.database.url = Some(url);
    }
    if let Some(output) = args.output.clone() {
        config.generator.output = output;
    }
    if let Some(context) = args.context.clone() {
        config.generator.context_class_name = context;
    }

    let mssql_config = config.to_mssql_config()?;
    let output_root = config.generator.output.clone();

    output::kv("Server", &mssql_config.host);
    output::kv("Database", &mssql_config.database);
    output::kv("Output", &output_root.display().to_string());
    output::newline();

    output::step(1, 3, "Connecting to database...");
    let pool = MssqlPool::new(mssql_config).await?;
    let provider = MssqlSchemaProvider::new(pool);

    output::step(2, 3, "Reading schema and generating artifacts...");
    let generator = Generator::new(config.generator_options());
    let mut report = generator.generate(&provider, &TracingSink).await;

    output::step(3, 3, "Writing files...");
    output::newline();
    output::section("Generated files");

    let mut written = 0usize;
    for artifact in &report.artifacts {
        let path = output_root.join(&artifact.file_name);
        // One unwritable file never aborts the run.
        let result = match path.parent() {
            Some(parent) => std::fs::create_dir_all(parent)
                .and_then(|()| std::fs::write(&path, &artifact.content)),
            None => std::fs::write(&path, &artifact.content),
        };
        match result {
            Ok(()) => {
                written += 1;
                output::list_item(&artifact.file_name.display().to_string());
            }
            Err(e) => {
                let failure = Failure::new(
                    FailureKind::Persistence,
                    artifact.file_name.display().to_string(),
                    e.to_string(),
                );
                output::warn(&failure.to_message());
                report.failures.push(failure);
            }
        }
    }

    output::newline();
    success(&format!("Generated {} files", written));
    if !report.failures.is_empty() {
        output::warn(&format!(
            "Completed with {} recoverable failures",
            report.failures.len()
        ));
    }

    Ok(())
}
