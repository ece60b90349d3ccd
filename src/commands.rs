// src/commands.rs
//! Command handlers for the jilmig CLI

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use jilmig::{Migration, MigrationConfig};
use std::path::Path;
use tracing::warn;

use crate::cli::Cli;

/// Run a migration from a JIL file to a SQL artifact
pub fn cmd_migrate(
    jil_file: &Path,
    output: &Path,
    config_path: Option<&Path>,
    validate: bool,
) -> Result<()> {
    if validate {
        warn!("--validate is accepted for compatibility but performs a full migration");
    }

    let config = match config_path {
        Some(path) => MigrationConfig::from_file(path)?,
        None => MigrationConfig::default(),
    };

    let migration = Migration::new(config);
    let outcome = migration.run(jil_file, output)?;

    outcome.report.print_digest();
    println!("\nMigration completed successfully!");
    println!("  SQL script: {}", output.display());

    Ok(())
}

/// Generate shell completion scripts on stdout
pub fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
