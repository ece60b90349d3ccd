// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

fn build_cli() -> Command {
    Command::new("jilmig")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Jilmig Contributors")
        .about("Migrate legacy Autosys JIL job definitions to the batch orchestrator schema")
        .subcommand_required(false)
        .subcommand(
            Command::new("migrate")
                .about("Migrate a JIL file to SQL insert statements")
                .arg(Arg::new("jil_file").required(true).help("Input JIL file path"))
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .default_value("migration.sql")
                        .help("Output SQL file"),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Optional TOML run configuration file"),
                )
                .arg(
                    Arg::new("validate")
                        .long("validate")
                        .action(clap::ArgAction::SetTrue)
                        .help("Validate the migration only (accepted for compatibility)"),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "zsh", "fish", "powershell"])
                        .help("Shell type"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Create man directory - use CARGO_MANIFEST_DIR which is always set by cargo
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let cmd = build_cli();
    let man = Man::new(cmd);
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("jilmig.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
        return;
    }
}
