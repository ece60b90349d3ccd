// src/cli.rs
//! CLI definitions for the jilmig migration tool
//!
//! This module contains the command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jilmig")]
#[command(author = "Jilmig Contributors")]
#[command(version)]
#[command(about = "Migrate legacy Autosys JIL job definitions to the batch orchestrator schema", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Migrate a JIL file to SQL insert statements
    Migrate {
        /// Input JIL file path
        jil_file: PathBuf,

        /// Output SQL file
        #[arg(short, long, default_value = "migration.sql")]
        output: PathBuf,

        /// Optional TOML run configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Validate the migration only (accepted for compatibility; not implemented)
        #[arg(long)]
        validate: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
