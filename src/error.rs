// src/error.rs
//! Error types for the migration pipeline

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a migration run
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error reading the source file or writing artifacts
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A numeric attribute could not be parsed for a job
    #[error("Job '{job}': attribute '{key}' has non-numeric value '{value}'")]
    InvalidAttribute {
        job: String,
        key: String,
        value: String,
    },

    /// Two job declarations share the same name
    #[error("Duplicate job name '{0}' in source file")]
    DuplicateJob(String),

    /// Run configuration file could not be parsed or failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Summary report serialization failed
    #[error("Report serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
