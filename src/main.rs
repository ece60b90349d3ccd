// src/main.rs

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Migrate {
            jil_file,
            output,
            config,
            validate,
        }) => commands::cmd_migrate(&jil_file, &output, config.as_deref(), validate),
        Some(Commands::Completions { shell }) => {
            commands::cmd_completions(shell);
            Ok(())
        }
        None => {
            // No command provided, show help
            println!("Jilmig v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'jilmig --help' for usage information");
            Ok(())
        }
    }
}
